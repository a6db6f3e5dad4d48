use super::{GameState, MoveMode};

impl GameState {
    /// Count leaf nodes of the legal-move tree `depth` plies deep.
    ///
    /// Runs on a copy, so the outcome flags of `self` are left alone.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        let mut probe = self.clone();
        probe.perft_inner(depth)
    }

    fn perft_inner(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            self.apply_move(mv, MoveMode::Committed);
            nodes += self.perft_inner(depth - 1);
            self.undo_move();
        }
        nodes
    }
}
