//! Property-based tests using proptest.

use crate::board::{Board, Color, GameState, MoveMode, PieceKind};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves, stopping early at a terminal position.
fn random_game(seed: u64, num_moves: usize) -> GameState {
    let mut game = GameState::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        game.apply_move(mv, MoveMode::Committed);
    }
    game
}

proptest! {
    /// Property: undoing every move restores the starting position exactly
    #[test]
    fn prop_undo_all_restores_start(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = random_game(seed, num_moves);

        while game.undo_move().is_some() {}

        prop_assert_eq!(game.board(), &Board::starting_position());
        prop_assert_eq!(game.side_to_move(), Color::White);
        prop_assert!(game.move_log().is_empty());
        prop_assert!(!game.is_checkmate());
        prop_assert!(!game.is_stalemate());
    }

    /// Property: apply then undo of any legal move restores board, side and log
    #[test]
    fn prop_apply_undo_restores_game(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut game = random_game(seed, num_moves);
        let before = game.clone();

        for mv in game.legal_moves() {
            game.apply_move(mv, MoveMode::Committed);
            let undone = game.undo_move();
            prop_assert_eq!(undone, Some(mv));
            prop_assert_eq!(game.board(), before.board(), "{} did not undo cleanly", mv);
            prop_assert_eq!(game.side_to_move(), before.side_to_move());
            prop_assert_eq!(game.move_log(), before.move_log());
        }
    }

    /// Property: make followed by unmake restores the board for every candidate
    #[test]
    fn prop_make_unmake_restores_board(seed in seed_strategy(), num_moves in 0..30usize) {
        let game = random_game(seed, num_moves);
        let original = *game.board();

        for mv in game.pseudo_legal_moves() {
            for mode in [MoveMode::Committed, MoveMode::Trial] {
                let mut board = original;
                board.make(&mv, mode);
                board.unmake(&mv);
                prop_assert_eq!(board, original, "{} did not unmake cleanly", mv);
            }
        }
    }

    /// Property: legal moves never leave the mover's king capturable
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut game = random_game(seed, num_moves);
        let mover = game.side_to_move();

        for mv in game.legal_moves() {
            game.apply_move(mv, MoveMode::Committed);
            prop_assert!(!game.is_in_check(mover),
                "Legal move left king in check: {}", mv);
            game.undo_move();
        }
    }

    /// Property: legal moves are a subset of pseudo-legal moves, in the same order
    #[test]
    fn prop_legal_is_ordered_subset(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut game = random_game(seed, num_moves);
        let pseudo = game.pseudo_legal_moves();
        let legal = game.legal_moves();

        let mut remaining = pseudo.iter();
        for mv in &legal {
            prop_assert!(remaining.any(|p| p == mv), "{} out of order or missing", mv);
        }
    }

    /// Property: checkmate and stalemate never hold together, and
    /// checkmate implies check
    #[test]
    fn prop_outcome_flags_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = random_game(seed, num_moves);
        let moves = game.legal_moves();

        prop_assert!(!(game.is_checkmate() && game.is_stalemate()));
        if game.is_checkmate() {
            prop_assert!(game.in_check());
        }
        if game.is_stalemate() {
            prop_assert!(!game.in_check());
        }
        prop_assert_eq!(moves.is_empty(), game.status().is_terminal());
    }

    /// Property: sliders never pass through an occupied square
    #[test]
    fn prop_sliders_do_not_jump(seed in seed_strategy(), num_moves in 0..30usize) {
        let game = random_game(seed, num_moves);
        let board = game.board();

        for mv in game.pseudo_legal_moves() {
            prop_assert!(!mv.piece_moved().is_empty(), "{} moves an empty square", mv);
            let Some(kind) = mv.piece_moved().kind() else { continue };
            if !kind.is_slider() {
                continue;
            }
            let dr = (mv.to().row() as i8 - mv.from().row() as i8).signum();
            let dc = (mv.to().col() as i8 - mv.from().col() as i8).signum();
            let mut at = mv.from();
            while let Some(next) = at.offset(dr, dc) {
                if next == mv.to() {
                    break;
                }
                prop_assert!(board.get(next).is_empty(), "{} jumps over {}", mv, next);
                at = next;
            }
        }
    }

    /// Property: FEN round-trip preserves board and side to move
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);

        let restored = GameState::from_fen(&game.to_fen());

        prop_assert_eq!(restored.board(), game.board());
        prop_assert_eq!(restored.side_to_move(), game.side_to_move());
    }

    /// Property: pawns never survive on their promotion row after a committed move
    #[test]
    fn prop_no_pawn_on_last_row(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);

        for color in Color::BOTH {
            let last_row = usize::from(color.promotion_row());
            for (at, kind) in game.board().pieces_of(color) {
                if kind == PieceKind::Pawn {
                    prop_assert_ne!(at.row(), last_row);
                }
            }
        }
    }
}
