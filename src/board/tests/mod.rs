//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece pseudo-legal generation
//! - `legality.rs` - Check, pins, checkmate and stalemate
//! - `make_unmake.rs` - Apply/undo correctness and promotion
//! - `edge_cases.rs` - Input validation and unusual positions
//! - `perft.rs` - Node counts for move generation
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{Coord, GameState, Move};

/// Find the pseudo-legal or legal move with this geometry, by coordinate notation.
pub(super) fn find_move(moves: &[Move], notation: &str) -> Option<Move> {
    moves
        .iter()
        .copied()
        .find(|m| m.to_coordinate_notation() == notation)
}

pub(super) fn notations(moves: &[Move]) -> Vec<String> {
    moves.iter().map(Move::to_coordinate_notation).collect()
}

pub(super) fn play_all(game: &mut GameState, moves: &[&str]) {
    for mv in moves {
        game.play(mv)
            .unwrap_or_else(|e| panic!("{mv} should be playable: {e}"));
    }
}

pub(super) fn sq(notation: &str) -> Coord {
    notation.parse().expect("valid square")
}
