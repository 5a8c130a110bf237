use super::super::{CastleSide, Move, Position, Square};

/// King steps as (row delta, col delta): diagonals first, then orthogonals
pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

impl Position {
    /// Single steps plus castling candidates.
    ///
    /// A castling candidate needs only the right flag and empty squares
    /// between the king file and the rook: b-d for the queenside, f-g for
    /// the kingside. The king's and rook's actual squares are not checked,
    /// and neither is whether the king stands in or passes through check.
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut Vec<Move>) {
        for offset in KING_OFFSETS {
            self.generate_ray_moves(from, offset, 1, moves);
        }

        for side in [CastleSide::Queenside, CastleSide::Kingside] {
            if self.can_castle_through(side) {
                moves.push(Move::castle(side));
            }
        }
    }

    /// Right is held and the squares between king and rook are empty
    pub(crate) fn can_castle_through(&self, side: CastleSide) -> bool {
        let color = self.side_to_play;
        if !self.castling.has(color, side) {
            return false;
        }

        let row = color.back_row();
        let between = match side {
            CastleSide::Queenside => 1..4,
            CastleSide::Kingside => 5..7,
        };
        between
            .into_iter()
            .all(|col| self.board.is_empty(Square(row, col)))
    }
}
