//! Fixed-offset destination tables and sliding directions.
//!
//! Knight and king destinations depend only on the origin square, so they are
//! computed once per square and stored in row-major order. Each list keeps the
//! offset order below, which fixes the order moves are generated in.

use once_cell::sync::Lazy;

use super::{Coord, BOARD_SIZE};

const SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

/// Rook rays: down, up, right, left (row grows toward White's home row)
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn build_targets(offsets: &[(i8, i8)]) -> [Vec<Coord>; SQUARES] {
    let mut table: [Vec<Coord>; SQUARES] = std::array::from_fn(|_| Vec::new());
    for from in Coord::all() {
        table[from.index()] = offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect();
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Coord>; SQUARES]> =
    Lazy::new(|| build_targets(&KNIGHT_OFFSETS));

pub(crate) static KING_TARGETS: Lazy<[Vec<Coord>; SQUARES]> =
    Lazy::new(|| build_targets(&KING_OFFSETS));

#[inline]
pub(crate) fn knight_targets(from: Coord) -> &'static [Coord] {
    &KNIGHT_TARGETS[from.index()]
}

#[inline]
pub(crate) fn king_targets(from: Coord) -> &'static [Coord] {
    &KING_TARGETS[from.index()]
}
