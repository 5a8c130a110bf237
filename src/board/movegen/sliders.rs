use super::super::{Move, Position, Square};

/// Longest ray a sliding piece can travel on an 8x8 board
pub(crate) const SLIDER_REACH: usize = 7;

/// Rook rays as (row delta, col delta): east, west, south, north
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Bishop rays as (row delta, col delta)
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

impl Position {
    /// Walk from `from` in one direction for at most `max_steps` squares.
    ///
    /// Each empty square yields a quiet move. The first occupied square
    /// ends the walk: it yields a capture if it holds an enemy piece and
    /// nothing if it holds one of ours. Leaving the board ends the walk
    /// without a move.
    pub(crate) fn generate_ray_moves(
        &self,
        from: Square,
        (d_row, d_col): (isize, isize),
        max_steps: usize,
        moves: &mut Vec<Move>,
    ) {
        let mut current = from;
        for _ in 0..max_steps {
            let Some(to) = current.offset(d_row, d_col) else {
                break;
            };
            match self.board.get(to) {
                None => moves.push(Move::normal(from, to)),
                Some((color, _)) => {
                    if color != self.side_to_play {
                        moves.push(Move::normal(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }

    pub(crate) fn generate_rook_moves(&self, from: Square, moves: &mut Vec<Move>) {
        for dir in ROOK_DIRECTIONS {
            self.generate_ray_moves(from, dir, SLIDER_REACH, moves);
        }
    }

    pub(crate) fn generate_bishop_moves(&self, from: Square, moves: &mut Vec<Move>) {
        for dir in BISHOP_DIRECTIONS {
            self.generate_ray_moves(from, dir, SLIDER_REACH, moves);
        }
    }

    /// Bishop rays first, then rook rays
    pub(crate) fn generate_queen_moves(&self, from: Square, moves: &mut Vec<Move>) {
        self.generate_bishop_moves(from, moves);
        self.generate_rook_moves(from, moves);
    }
}
