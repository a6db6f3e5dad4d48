use super::super::{Board, Color, Coord, Move};

impl Board {
    /// Single advance, double advance from the start row through an empty
    /// square, and diagonal captures (left, then right). No en passant.
    pub(crate) fn push_pawn_moves(&self, from: Coord, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();
        let Some(ahead) = from.offset(dir, 0) else {
            return;
        };

        if self.get(ahead).is_empty() {
            moves.push(Move::new(from, ahead, self));
            if from.row() == color.pawn_start_row() as usize {
                if let Some(two_ahead) = ahead.offset(dir, 0) {
                    if self.get(two_ahead).is_empty() {
                        moves.push(Move::new(from, two_ahead, self));
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if self.get(target).is_color(color.opponent()) {
                    moves.push(Move::new(from, target, self));
                }
            }
        }
    }
}
