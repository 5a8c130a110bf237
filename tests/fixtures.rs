//! Known positions loaded from `tests/data/positions.json`.

use chess_position::board::Position;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Fixture {
    name: String,
    fen: String,
    move_count: usize,
    material: i32,
    perft2: u64,
    first_move: String,
    last_move: String,
}

fn load() -> Vec<Fixture> {
    let text = include_str!("data/positions.json");
    serde_json::from_str(text).expect("fixture file parses")
}

#[test]
fn fixtures_match_move_generation() {
    for fixture in load() {
        let pos = Position::from_fen(&fixture.fen).expect("fixture fen is valid");
        let moves = pos.legal_moves();
        assert_eq!(moves.len(), fixture.move_count, "{}", fixture.name);

        let first = moves.first().expect("fixture has moves");
        let last = moves.last().expect("fixture has moves");
        assert_eq!(pos.format_move(*first), fixture.first_move, "{}", fixture.name);
        assert_eq!(pos.format_move(*last), fixture.last_move, "{}", fixture.name);
    }
}

#[test]
fn fixtures_match_material() {
    for fixture in load() {
        let pos = Position::from_fen(&fixture.fen).expect("fixture fen is valid");
        assert_eq!(pos.material_score(), fixture.material, "{}", fixture.name);
    }
}

#[test]
fn fixtures_match_perft() {
    for fixture in load() {
        let pos = Position::from_fen(&fixture.fen).expect("fixture fen is valid");
        assert_eq!(pos.perft(2), Ok(fixture.perft2), "{}", fixture.name);
    }
}

#[test]
fn fixtures_survive_fen_round_trip() {
    for fixture in load() {
        let pos = Position::from_fen(&fixture.fen).expect("fixture fen is valid");
        assert_eq!(pos.to_fen(), fixture.fen, "{}", fixture.name);
    }
}
