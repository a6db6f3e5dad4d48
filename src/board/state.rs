#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PositionError;
use super::{Board, Color, Coord, Move, PieceKind, Square, BOARD_SIZE};

/// Outcome annotation for the side to move.
///
/// `Check` decorates an ongoing game. `Checkmate` and `Stalemate` are
/// terminal until a move is undone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// One game: the board, whose turn it is, the move history and the outcome flags.
///
/// The move log is the only history kept. Undo rebuilds the previous board
/// from the popped move's recorded cells.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) move_log: Vec<Move>,
    pub(crate) in_check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// Standard initial position, White to move, empty log, all flags clear.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            move_log: Vec::new(),
            in_check: false,
            checkmate: false,
            stalemate: false,
        }
    }

    /// Start a game from an arbitrary placement.
    ///
    /// Each color must have exactly one king and the side that is not to
    /// move must not be in check. The outcome flags are computed for the
    /// starting position, so a position that is already mate reports it.
    pub fn from_board(board: Board, side_to_move: Color) -> Result<Self, PositionError> {
        validate_position(&board, side_to_move)?;
        let mut state = GameState {
            board,
            side_to_move,
            move_log: Vec::new(),
            in_check: false,
            checkmate: false,
            stalemate: false,
        };
        state.refresh_status();
        Ok(state)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only copy of the grid for rendering.
    #[must_use]
    pub fn board_snapshot(&self) -> [[Square; BOARD_SIZE]; BOARD_SIZE] {
        self.board.cells()
    }

    #[must_use]
    pub fn piece_at(&self, at: Coord) -> Square {
        self.board.get(at)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Whether the side to move was in check at the last legal-move computation.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move.opponent(),
            }
        } else if self.stalemate {
            GameStatus::Stalemate
        } else if self.in_check {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

pub(crate) fn validate_position(board: &Board, side_to_move: Color) -> Result<(), PositionError> {
    for color in Color::BOTH {
        let found = board.count(color, PieceKind::King);
        if found != 1 {
            return Err(PositionError::KingCount { color, found });
        }
    }
    if board.attacks_king(side_to_move) {
        return Err(PositionError::OpponentInCheck {
            color: side_to_move.opponent(),
        });
    }
    Ok(())
}
