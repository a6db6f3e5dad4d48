//! Legality filtering and check detection.
//!
//! A move is legal when, after it is played, no pseudo-legal reply of the
//! opponent lands on the mover's king. Each candidate is tried on a private
//! copy of the board, so the live game is never mutated while probing and
//! nothing needs restoring afterwards. This costs one opponent move
//! generation per candidate.

use super::{Color, GameState, GameStatus, Move, MoveMode};

impl GameState {
    /// Whether `color`'s king could be captured by the opponent right now.
    ///
    /// A position without a king for `color` cannot be reached through
    /// [`GameState`]'s constructors and legal play; it is treated as "not
    /// in check" and flagged in debug builds.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        debug_assert!(
            self.board.find_king(color).is_some(),
            "{color} has no king on the board"
        );
        self.board.attacks_king(color.opponent())
    }

    /// All pseudo-legal moves for the side to move.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        self.board.pseudo_legal_moves(self.side_to_move)
    }

    /// The legal moves of the side to move, in generation order.
    ///
    /// Also records whether the side to move is in check and, when no move
    /// is left, sets checkmate (if in check) or stalemate. Those two flags
    /// are only ever set here, never cleared.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move;
        let mut moves = self.board.pseudo_legal_moves(mover);
        self.in_check = self.is_in_check(mover);

        moves.retain(|mv| !self.exposes_king(mv));

        if moves.is_empty() {
            if self.in_check {
                self.checkmate = true;
            } else {
                self.stalemate = true;
            }
        }
        moves
    }

    /// True if playing `mv` would leave the mover's king capturable.
    fn exposes_king(&self, mv: &Move) -> bool {
        let mut trial = self.board;
        trial.make(mv, MoveMode::Trial);
        trial.attacks_king(self.side_to_move.opponent())
    }

    /// Recompute the outcome flags for the current position.
    pub(crate) fn refresh_status(&mut self) -> GameStatus {
        let _ = self.legal_moves();
        let status = self.status();
        #[cfg(feature = "logging")]
        match status {
            GameStatus::Checkmate { winner } => log::info!("checkmate, {winner} wins"),
            GameStatus::Stalemate => log::info!("stalemate"),
            GameStatus::Check => log::debug!("{} is in check", self.side_to_move),
            GameStatus::InProgress => {}
        }
        status
    }
}
