//! Pseudo-legal move generation.
//!
//! Generators append into a shared `Vec<Move>` and never look at whether the
//! mover's own king is left capturable; that filtering happens in
//! `legality.rs`.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Coord, Move, PieceKind};

impl Board {
    /// All pseudo-legal moves for `color`, scanning squares row-major.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for (from, kind) in self.pieces_of(color) {
            self.push_piece_moves(from, color, kind, &mut moves);
        }
        moves
    }

    /// Pseudo-legal moves of the single piece `kind` standing on `from`.
    pub(crate) fn push_piece_moves(
        &self,
        from: Coord,
        color: Color,
        kind: PieceKind,
        moves: &mut Vec<Move>,
    ) {
        match kind {
            PieceKind::Pawn => self.push_pawn_moves(from, color, moves),
            PieceKind::Knight => self.push_knight_moves(from, color, moves),
            PieceKind::Bishop => self.push_bishop_moves(from, color, moves),
            PieceKind::Rook => self.push_rook_moves(from, color, moves),
            PieceKind::Queen => self.push_queen_moves(from, color, moves),
            PieceKind::King => self.push_king_moves(from, color, moves),
        }
    }

    /// True if `color` has a pseudo-legal move that lands on `color.opponent()`'s king.
    pub(crate) fn attacks_king(&self, color: Color) -> bool {
        self.pseudo_legal_moves(color)
            .iter()
            .any(Move::captures_king)
    }

    /// Step targets (knight, king): destination must be empty or hold an enemy.
    fn push_step_moves(&self, from: Coord, color: Color, targets: &[Coord], moves: &mut Vec<Move>) {
        for &to in targets {
            if !self.get(to).is_color(color) {
                moves.push(Move::new(from, to, self));
            }
        }
    }
}
