use super::super::{Move, Position, Square};

/// Knight jumps as (row delta, col delta)
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut Vec<Move>) {
        for offset in KNIGHT_OFFSETS {
            self.generate_ray_moves(from, offset, 1, moves);
        }
    }
}
