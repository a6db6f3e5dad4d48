use super::super::attack_tables::{DIAGONAL, ORTHOGONAL};
use super::super::{Board, Color, Coord, Move, Square};

impl Board {
    pub(crate) fn push_rook_moves(&self, from: Coord, color: Color, moves: &mut Vec<Move>) {
        self.push_ray_moves(from, color, &ORTHOGONAL, moves);
    }

    pub(crate) fn push_bishop_moves(&self, from: Coord, color: Color, moves: &mut Vec<Move>) {
        self.push_ray_moves(from, color, &DIAGONAL, moves);
    }

    /// Bishop rays first, then rook rays.
    pub(crate) fn push_queen_moves(&self, from: Coord, color: Color, moves: &mut Vec<Move>) {
        self.push_bishop_moves(from, color, moves);
        self.push_rook_moves(from, color, moves);
    }

    /// Walk each ray until the edge or the first occupied square. That square
    /// is included only when it holds an enemy piece.
    fn push_ray_moves(&self, from: Coord, color: Color, rays: &[(i8, i8)], moves: &mut Vec<Move>) {
        for &(dr, dc) in rays {
            let mut cursor = from.offset(dr, dc);
            while let Some(to) = cursor {
                match self.get(to) {
                    Square::Empty => moves.push(Move::new(from, to, self)),
                    Square::Occupied(other, _) => {
                        if other != color {
                            moves.push(Move::new(from, to, self));
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, dc);
            }
        }
    }
}
