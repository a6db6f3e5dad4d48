//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//!
//! let game = GameState::new();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, Color, Coord, GameError, GameState, GameStatus, Move, MoveMode,
    PieceKind, Square,
};
