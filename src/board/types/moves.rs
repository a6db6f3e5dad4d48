//! Move value type.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::piece::PieceKind;
use super::square::Square;
use crate::board::Board;

/// A single piece displacement on a specific board snapshot.
///
/// The contents of both squares are captured by value when the move is
/// built, so a `Move` alone is enough to undo itself. Equality and hashing
/// look only at the geometry: two moves with the same start and end
/// squares are equal whatever pieces they recorded.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Coord,
    to: Coord,
    piece_moved: Square,
    piece_captured: Square,
}

impl Move {
    /// Build a move from `from` to `to`, recording both cells of `board`.
    #[must_use]
    pub fn new(from: Coord, to: Coord, board: &Board) -> Self {
        Move {
            from,
            to,
            piece_moved: board.get(from),
            piece_captured: board.get(to),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Coord {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Coord {
        self.to
    }

    /// Contents of the start square before the move
    #[inline]
    #[must_use]
    pub const fn piece_moved(&self) -> Square {
        self.piece_moved
    }

    /// Contents of the end square before the move
    #[inline]
    #[must_use]
    pub const fn piece_captured(&self) -> Square {
        self.piece_captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        !self.piece_captured.is_empty()
    }

    /// True if this move takes a king. Check detection is built on this.
    #[inline]
    #[must_use]
    pub fn captures_king(&self) -> bool {
        self.piece_captured.kind() == Some(PieceKind::King)
    }

    /// True if a pawn lands on its far row
    #[must_use]
    pub fn is_promotion(&self) -> bool {
        match self.piece_moved {
            Square::Occupied(color, PieceKind::Pawn) => self.to.row() == color.promotion_row() as usize,
            _ => false,
        }
    }

    /// Start file+rank followed by end file+rank, e.g. `"e2e4"`.
    #[must_use]
    pub fn to_coordinate_notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
