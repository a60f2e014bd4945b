use std::env;
use std::process::ExitCode;

use checkers_solver::board::{load_board, Side};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: list_moves <board-file> [r|b]");
        return ExitCode::from(2);
    }

    let side = match args.get(2).map(String::as_str) {
        None => Side::Red,
        Some(s) => match s.chars().next().and_then(Side::from_char) {
            Some(side) => side,
            None => {
                eprintln!("unknown side '{s}', expected r or b");
                return ExitCode::from(2);
            }
        },
    };

    let board = match load_board(&args[1]) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let moves = board.generate_moves(side);
    println!("side_to_move: {side}");
    println!("legal_moves: {}", moves.len());
    println!("utility: {}", board.utility(side, 0));
    println!("evaluate: {}", board.evaluate(side));
    for mv in &moves {
        let next = board.apply_move(mv);
        println!("{mv} evaluate {}", next.evaluate(side));
        print!("{next}");
    }
    ExitCode::SUCCESS
}
