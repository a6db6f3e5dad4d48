//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A position on the grid as (row, col).
///
/// Row 0 is rank 8 (Black's home row), row 7 is rank 1. Column 0 is file 'a'.
/// A `Coord` is always inside the board; construction goes through
/// [`Coord::new`] or [`Coord::offset`], both of which check bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, rejecting anything outside the 8x8 grid.
    pub fn new(row: usize, col: usize) -> Result<Self, CoordError> {
        if row >= BOARD_SIZE {
            return Err(CoordError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(CoordError::ColOutOfBounds { col });
        }
        Ok(Coord {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Unchecked construction for loop indices known to be in range.
    #[inline]
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Coord {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Shift by a (row, col) delta; `None` if the result leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coord> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::at(row, col)))
    }

    /// Index 0..64 in row-major order
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// File letter, 'a'..='h'
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank digit, '8' for row 0 down to '1' for row 7
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = CoordError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row(), coord.col())
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let col = match bytes[0] {
            f @ b'a'..=b'h' => (f - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => (b'8' - r) as usize,
            _ => return Err(invalid()),
        };
        Ok(Coord::at(row, col))
    }
}
