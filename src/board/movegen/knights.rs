use super::super::attack_tables::knight_targets;
use super::super::{Board, Color, Coord, Move};

impl Board {
    pub(crate) fn push_knight_moves(&self, from: Coord, color: Color, moves: &mut Vec<Move>) {
        self.push_step_moves(from, color, knight_targets(from), moves);
    }
}
