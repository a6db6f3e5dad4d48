//! The 8x8 cell grid.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Coord, PieceKind, Square, BOARD_SIZE};

/// Back rank piece order, file a to file h.
pub(crate) const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement only. Small and `Copy`, so a trial position is just a copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    cells: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard initial placement: Black on rows 0-1, White on rows 6-7.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Square::Occupied(Color::Black, kind);
            board.cells[1][col] = Square::Occupied(Color::Black, PieceKind::Pawn);
            board.cells[6][col] = Square::Occupied(Color::White, PieceKind::Pawn);
            board.cells[7][col] = Square::Occupied(Color::White, kind);
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn get(&self, at: Coord) -> Square {
        self.cells[at.row()][at.col()]
    }

    #[inline]
    pub fn set(&mut self, at: Coord, square: Square) {
        self.cells[at.row()][at.col()] = square;
    }

    /// Copy of the whole grid, row 0 first.
    #[must_use]
    pub const fn cells(&self) -> [[Square; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }

    /// Every occupied cell of `color`, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coord, PieceKind)> + '_ {
        Coord::all().filter_map(move |at| match self.get(at) {
            Square::Occupied(c, kind) if c == color => Some((at, kind)),
            _ => None,
        })
    }

    /// First king of `color` in row-major order.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Coord> {
        self.pieces_of(color)
            .find(|&(_, kind)| kind == PieceKind::King)
            .map(|(at, _)| at)
    }

    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color).filter(|&(_, k)| k == kind).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for square in cells {
                write!(f, " {}", square.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
