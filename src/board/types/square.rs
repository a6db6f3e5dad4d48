//! Contents of a single board cell.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, PieceKind};

/// A board cell: either empty or holding one piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Square {
    #[default]
    Empty,
    Occupied(Color, PieceKind),
}

impl Square {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Square::Empty => None,
            Square::Occupied(color, _) => Some(color),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Square::Empty => None,
            Square::Occupied(_, kind) => Some(kind),
        }
    }

    /// True if the cell holds a piece of `color`
    #[inline]
    #[must_use]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// True if the cell holds `color`'s king
    #[inline]
    #[must_use]
    pub fn is_king_of(self, color: Color) -> bool {
        self == Square::Occupied(color, PieceKind::King)
    }

    /// Diagram character: uppercase for White, lowercase for Black, `.` if empty
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(color, kind) => kind.to_fen_char(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_square() {
        let sq = Square::default();
        assert!(sq.is_empty());
        assert_eq!(sq.color(), None);
        assert_eq!(sq.kind(), None);
        assert_eq!(sq.to_char(), '.');
    }

    #[test]
    fn test_occupied_square() {
        let sq = Square::Occupied(Color::Black, PieceKind::King);
        assert!(sq.is_color(Color::Black));
        assert!(!sq.is_color(Color::White));
        assert!(sq.is_king_of(Color::Black));
        assert!(!sq.is_king_of(Color::White));
        assert_eq!(sq.to_char(), 'k');
        assert_eq!(Square::Occupied(Color::White, PieceKind::Knight).to_char(), 'N');
    }
}
