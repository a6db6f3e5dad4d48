//! Fluent builder for setting up game positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use mailbox_chess::{BoardBuilder, Color, Coord, PieceKind};
//!
//! let game = BoardBuilder::new()
//!     .piece(Coord::new(7, 4).unwrap(), Color::White, PieceKind::King)
//!     .piece(Coord::new(0, 4).unwrap(), Color::Black, PieceKind::King)
//!     .piece(Coord::new(1, 0).unwrap(), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

use super::error::PositionError;
use super::grid::BACK_RANK;
use super::{Board, Color, Coord, GameState, PieceKind, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            builder = builder
                .piece(Coord::at(0, col), Color::Black, kind)
                .piece(Coord::at(1, col), Color::Black, PieceKind::Pawn)
                .piece(Coord::at(6, col), Color::White, PieceKind::Pawn)
                .piece(Coord::at(7, col), Color::White, kind);
        }
        builder
    }

    /// Place a piece, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, at: Coord, color: Color, kind: PieceKind) -> Self {
        self.board.set(at, Square::Occupied(color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, at: Coord) -> Self {
        self.board.set(at, Square::Empty);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Validate the placement and start a game from it.
    pub fn build(self) -> Result<GameState, PositionError> {
        GameState::from_board(self.board, self.side_to_move)
    }
}
