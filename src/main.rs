//! Demo driver: lists the moves of a fixed position, plays one, and prints
//! the result.
//!
//! Usage: `chess_position [INDEX | random | best [DEPTH]]`
//! (default: the move at index 10).

use std::env;
use std::process::ExitCode;

use chess_position::board::{best_move, Position};
use rand::Rng;

const DEMO_FEN: &str = "rnbqkb1r/pp3ppp/2p2n2/3p4/8/1P2p1PN/PBPPPPBP/RNQ1K2R w KQkq - 0 1";

enum Choice {
    Index(usize),
    Random,
    Best(u32),
}

fn parse_choice(args: &[String]) -> Result<Choice, String> {
    match args.first().map(String::as_str) {
        None => Ok(Choice::Index(10)),
        Some("random") => Ok(Choice::Random),
        Some("best") => {
            let depth = match args.get(1) {
                Some(text) => text
                    .parse()
                    .map_err(|_| format!("invalid depth '{text}'"))?,
                None => 2,
            };
            Ok(Choice::Best(depth))
        }
        Some(text) => text
            .parse()
            .map(Choice::Index)
            .map_err(|_| format!("expected a move index, 'random' or 'best', got '{text}'")),
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let position = Position::from_fen(DEMO_FEN).map_err(|e| e.to_string())?;
    let moves = position.legal_moves();
    for mv in &moves {
        println!("{}", position.format_move(*mv));
    }
    println!();

    let mv = match parse_choice(args)? {
        Choice::Index(index) => *moves
            .get(index)
            .ok_or_else(|| format!("move index {index} out of range (0..{})", moves.len()))?,
        Choice::Random => {
            if moves.is_empty() {
                return Err("no moves to choose from".to_string());
            }
            moves[rand::thread_rng().gen_range(0..moves.len())]
        }
        Choice::Best(depth) => {
            let result = best_move(&position, depth).map_err(|e| e.to_string())?;
            println!("Searched {} nodes, score {}", result.nodes, result.score);
            result
                .best_move
                .ok_or_else(|| "no moves to choose from".to_string())?
        }
    };

    println!("Playing {}", position.format_move(mv));
    let next = position.apply(mv).map_err(|e| e.to_string())?;
    println!("{next}");
    println!("Score: {}", next.material_score());
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
