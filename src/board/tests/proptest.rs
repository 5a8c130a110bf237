//! Property-based tests using proptest.
//!
//! Each property plays a random game from the starting position, picking
//! moves with a seeded `StdRng` so failures shrink to a reproducible seed.

use crate::board::{Move, Piece, Position};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy for the length of a random playout
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy for the seed driving move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Positions visited by a random playout, starting position first
fn playout(seed: u64, plies: usize) -> Vec<(Position, Option<Move>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::new();
    let mut line = Vec::with_capacity(plies + 1);

    for _ in 0..plies {
        let moves = pos.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        line.push((pos, Some(mv)));
        pos = pos.apply(mv).expect("generated moves apply");
    }
    line.push((pos, None));
    line
}

proptest! {
    /// Property: every generated move applies and the turn alternates
    #[test]
    fn prop_side_alternates(seed in seed_strategy(), plies in ply_count_strategy()) {
        for pair in playout(seed, plies).windows(2) {
            let (before, _) = pair[0];
            let (after, _) = pair[1];
            prop_assert_eq!(after.side_to_play(), before.side_to_play().opponent());
        }
    }

    /// Property: castling rights are only ever lost
    #[test]
    fn prop_castling_rights_only_shrink(seed in seed_strategy(), plies in ply_count_strategy()) {
        for pair in playout(seed, plies).windows(2) {
            let (before, _) = pair[0];
            let (after, _) = pair[1];
            prop_assert!(after.castling_rights().is_subset_of(before.castling_rights()));
        }
    }

    /// Property: every destination lies on the board and every origin
    /// holds a piece of the side to play
    #[test]
    fn prop_moves_stay_on_board(seed in seed_strategy(), plies in ply_count_strategy()) {
        for (pos, _) in playout(seed, plies) {
            for mv in pos.legal_moves() {
                if let (Some(from), Some(to)) = (mv.from(), mv.to()) {
                    prop_assert!(to.is_on_board());
                    let mover = pos.piece_at(from).map(|(color, _)| color);
                    prop_assert_eq!(mover, Some(pos.side_to_play()));
                }
            }
        }
    }

    /// Property: applying the same move twice gives equal positions and
    /// leaves the source position unchanged
    #[test]
    fn prop_apply_is_pure(seed in seed_strategy(), plies in ply_count_strategy()) {
        for (pos, mv) in playout(seed, plies) {
            let Some(mv) = mv else { continue };
            let snapshot = pos;
            let first = pos.apply(mv);
            let second = pos.apply(mv);
            prop_assert_eq!(first, second);
            prop_assert_eq!(pos, snapshot);
        }
    }

    /// Property: the boost marker is set exactly by a two-row pawn move
    #[test]
    fn prop_boost_marks_double_push(seed in seed_strategy(), plies in ply_count_strategy()) {
        for (pos, mv) in playout(seed, plies) {
            let Some(mv) = mv else { continue };
            let next = pos.apply(mv).expect("generated moves apply");
            let expected = match (mv.from(), mv.to()) {
                (Some(from), Some(to))
                    if pos.piece_at(from).is_some_and(|(_, p)| p == Piece::Pawn)
                        && from.row().abs_diff(to.row()) == 2 =>
                {
                    Some(from.col())
                }
                _ => None,
            };
            prop_assert_eq!(next.pawn_boost_file(), expected);
        }
    }

    /// Property: FEN text round-trips through every visited position
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), plies in ply_count_strategy()) {
        for (pos, _) in playout(seed, plies) {
            prop_assert_eq!(Position::from_fen(&pos.to_fen()), Ok(pos));
        }
    }
}
