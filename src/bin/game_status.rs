use std::env;
use std::process::ExitCode;

use mailbox_chess::GameState;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("usage: game_status [--fen \"<placement> <side>\"] <move1> <move2> ...");
        return ExitCode::SUCCESS;
    }

    let (mut game, moves) = match args.first().map(String::as_str) {
        Some("--fen") => {
            let Some(fen) = args.get(1) else {
                eprintln!("--fen needs a position");
                return ExitCode::FAILURE;
            };
            match GameState::try_from_fen(fen) {
                Ok(game) => (game, &args[2..]),
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => (GameState::new(), &args[..]),
    };

    for mv in moves {
        if let Err(e) = game.play(mv) {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = game.legal_moves();
    println!("side_to_move: {}", game.side_to_move());
    println!("legal_moves: {}", legal_moves.len());
    println!("in_check: {}", game.in_check());
    println!("checkmate: {}", game.is_checkmate());
    println!("stalemate: {}", game.is_stalemate());
    println!("status: {:?}", game.status());
    println!("{}", game.board());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
