//! Edge cases: odd positions and the rules left unchecked.

use crate::board::{
    CastleSide, CastlingRights, Color, Move, Piece, Position, PositionBuilder, Square,
};

#[test]
fn test_pawn_on_far_row_is_stuck() {
    let white = PositionBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::Pawn)
        .piece(Square(1, 3), Color::Black, Piece::Rook)
        .build();
    assert!(white.legal_moves().is_empty());

    let black = PositionBuilder::new()
        .piece(Square(7, 4), Color::Black, Piece::Pawn)
        .side_to_play(Color::Black)
        .build();
    assert!(black.legal_moves().is_empty());
}

#[test]
fn test_pawn_reaching_last_row_stays_a_pawn() {
    let pos = PositionBuilder::new()
        .piece(Square(1, 0), Color::White, Piece::Pawn)
        .build();
    let next = pos.apply(Move::from_coords(1, 0, 0, 0)).expect("push applies");
    assert_eq!(next.piece_at(Square(0, 0)), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_no_en_passant_capture() {
    // Black pawn d4, White has just played e2e4
    let pos = Position::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").expect("valid fen");
    let pos = pos.apply(Move::from_coords(6, 4, 4, 4)).expect("e2e4 applies");
    assert_eq!(pos.pawn_boost_file(), Some(4));
    assert_eq!(pos.en_passant_square(), Some(Square(5, 4)));
    let pawn_moves = pos.moves_from(Square(4, 3));
    assert_eq!(pawn_moves, [Move::from_coords(4, 3, 5, 3)]);
}

#[test]
fn test_castling_with_king_off_home_square() {
    // Rights held, king on b2: the candidate comes from the king wherever it
    // stands, and applying it drops a second king on g1
    let pos = PositionBuilder::new()
        .piece(Square(6, 1), Color::White, Piece::King)
        .piece(Square(7, 7), Color::White, Piece::Rook)
        .castle_kingside(Color::White)
        .build();
    assert!(pos.legal_moves().contains(&Move::castle(CastleSide::Kingside)));

    let next = pos.apply(Move::castle(CastleSide::Kingside)).expect("castling never fails");
    assert_eq!(next.piece_at(Square(7, 6)), Some((Color::White, Piece::King)));
    assert_eq!(next.piece_at(Square(7, 5)), Some((Color::White, Piece::Rook)));
    assert_eq!(next.piece_at(Square(6, 1)), Some((Color::White, Piece::King)));
    assert_eq!(next.castling_rights(), CastlingRights::none());
}

#[test]
fn test_castle_applies_without_right() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("valid fen");
    let next = pos.apply(Move::castle(CastleSide::Queenside)).expect("castling never fails");
    assert_eq!(next.piece_at(Square(7, 2)), Some((Color::White, Piece::King)));
    assert_eq!(next.piece_at(Square(7, 3)), Some((Color::White, Piece::Rook)));
}

#[test]
fn test_format_move_with_empty_origin() {
    let pos = Position::new();
    assert_eq!(pos.format_move(Move::from_coords(4, 4, 3, 4)), "e4 -> e5");
}
