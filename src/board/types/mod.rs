//! Core chess types.
//!
//! - `Color` and `PieceKind` - piece identity
//! - `Square` - contents of one cell (empty or a colored piece)
//! - `Coord` - a validated (row, col) position on the grid
//! - `Move` - a displacement with the pre-move contents of both cells

mod coord;
mod moves;
mod piece;
mod square;

pub use coord::{Coord, BOARD_SIZE};
pub use moves::Move;
pub use piece::{Color, PieceKind};
pub use square::Square;
