use super::error::GameError;
use super::{Board, Coord, GameState, Move, PieceKind, Square};

/// How a move is being applied.
///
/// `Committed` moves are real plies and promote pawns that reach the far row.
/// `Trial` moves only probe the resulting position and never promote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveMode {
    Committed,
    Trial,
}

impl Board {
    /// Empty the start square and put the recorded moving piece on the end square.
    pub fn make(&mut self, mv: &Move, mode: MoveMode) {
        self.set(mv.from(), Square::Empty);
        self.set(mv.to(), mv.piece_moved());
        if mode == MoveMode::Committed && mv.is_promotion() {
            if let Square::Occupied(color, _) = mv.piece_moved() {
                self.set(mv.to(), Square::Occupied(color, PieceKind::Queen));
            }
        }
    }

    /// Put both recorded cells back. Reverses a promotion too, since the
    /// recorded moving piece is the pawn.
    pub fn unmake(&mut self, mv: &Move) {
        self.set(mv.from(), mv.piece_moved());
        self.set(mv.to(), mv.piece_captured());
    }
}

impl GameState {
    /// Apply `mv` without checking legality; callers pick from [`GameState::legal_moves`].
    pub fn apply_move(&mut self, mv: Move, mode: MoveMode) {
        self.board.make(&mv, mode);
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Pop and reverse the last move. Returns `None` when the log is empty.
    ///
    /// Clears the checkmate and stalemate flags: the restored position is
    /// the one before the terminal move.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        self.board.unmake(&mv);
        self.side_to_move = self.side_to_move.opponent();
        self.checkmate = false;
        self.stalemate = false;
        Some(mv)
    }

    /// Play the legal move from `from` to `to`, both given as (row, col).
    ///
    /// Coordinates are checked before anything touches the board. On
    /// success the move is committed (with promotion), the outcome flags are
    /// refreshed for the new side to move, and the move is returned. On
    /// failure the state is unchanged.
    pub fn try_move(&mut self, from: (usize, usize), to: (usize, usize)) -> Result<Move, GameError> {
        let from = checked_coord(from)?;
        let to = checked_coord(to)?;

        let Some(mv) = self
            .legal_moves()
            .into_iter()
            .find(|m| m.from() == from && m.to() == to)
        else {
            #[cfg(feature = "logging")]
            log::debug!("rejected {from}{to} for {}", self.side_to_move);
            return Err(GameError::IllegalMove {
                notation: format!("{from}{to}"),
            });
        };

        self.commit(mv);
        Ok(mv)
    }

    /// Undo the last move, reporting an empty log as an error.
    pub fn try_undo(&mut self) -> Result<Move, GameError> {
        let mv = self.undo_move().ok_or(GameError::EmptyUndoLog)?;
        #[cfg(feature = "logging")]
        log::trace!("undid {mv}");
        self.refresh_status();
        Ok(mv)
    }

    /// Undo the last move. Returns whether there was one.
    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// Commit a move already known to be legal and refresh the outcome flags.
    pub(crate) fn commit(&mut self, mv: Move) {
        #[cfg(feature = "logging")]
        log::debug!("{} plays {mv}", self.side_to_move);
        self.apply_move(mv, MoveMode::Committed);
        self.refresh_status();
    }
}

fn checked_coord((row, col): (usize, usize)) -> Result<Coord, GameError> {
    Coord::new(row, col).map_err(|_| {
        #[cfg(feature = "logging")]
        log::debug!("rejected off-board square ({row}, {col})");
        GameError::OutOfBounds { row, col }
    })
}
