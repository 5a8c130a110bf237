//! Search tests over the public API.

use chess_position::board::search::best_move_with_threads;
use chess_position::board::{best_move, Move, Position, SearchError};

#[test]
fn search_takes_hanging_queen() {
    // Black queen on d5 hangs to the e4 pawn
    let pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").expect("valid fen");
    let result = best_move(&pos, 1).expect("search runs");
    assert_eq!(result.best_move, Some(Move::from_coords(4, 4, 3, 3)));
    assert_eq!(result.score, 1);
}

#[test]
fn search_avoids_losing_the_queen() {
    // Qxd5 is met by exd5 two plies deep
    let pos = Position::from_fen("4k3/8/4p3/3p4/8/8/8/3QK3 w - - 0 1").expect("valid fen");
    let shallow = best_move_with_threads(&pos, 1, 2).expect("search runs");
    let deep = best_move_with_threads(&pos, 2, 2).expect("search runs");
    assert_eq!(shallow.best_move, Some(Move::from_coords(7, 3, 3, 3)));
    assert_ne!(deep.best_move, Some(Move::from_coords(7, 3, 3, 3)));
}

#[test]
fn search_rejects_zero_depth() {
    assert_eq!(
        best_move(&Position::new(), 0),
        Err(SearchError::InvalidDepth { depth: 0 })
    );
}

#[test]
fn search_result_is_a_generated_move() {
    let pos = Position::new();
    let result = best_move(&pos, 2).expect("search runs");
    let mv = result.best_move.expect("start has moves");
    assert!(pos.legal_moves().contains(&mv));
    assert_eq!(result.score, 0);
}
