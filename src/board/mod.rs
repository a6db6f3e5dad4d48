//! Chess board representation and game logic.
//!
//! A plain 8x8 grid of cells, per-piece move generators, and a
//! [`GameState`] that filters pseudo-legal moves down to legal ones and
//! tracks check, checkmate and stalemate. No castling, en passant or draw
//! rules; pawns always promote to a queen.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{GameState, GameStatus};
//!
//! let mut game = GameState::new();
//! let moves = game.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! game.try_move((6, 4), (4, 4)).unwrap();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod grid;
mod legality;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{CoordError, FenError, GameError, MoveParseError, PositionError};
pub use grid::Board;
pub use make_unmake::MoveMode;
pub use state::{GameState, GameStatus};
pub use types::{Color, Coord, Move, PieceKind, Square, BOARD_SIZE};
