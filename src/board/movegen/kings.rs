use super::super::attack_tables::king_targets;
use super::super::{Board, Color, Coord, Move};

impl Board {
    /// The eight neighbours. No castling.
    pub(crate) fn push_king_moves(&self, from: Coord, color: Color, moves: &mut Vec<Move>) {
        self.push_step_moves(from, color, king_targets(from), moves);
    }
}
