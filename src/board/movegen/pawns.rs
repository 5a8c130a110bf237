use super::super::{Move, Position, Square};

impl Position {
    /// Pushes and diagonal captures.
    ///
    /// The double push is only tried after the single push succeeded, so
    /// checking the landing square is enough. Promotion and en passant are
    /// not generated: a pawn reaching the far row stays a pawn and has no
    /// moves from there.
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_play;
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.board.is_empty(one) {
                moves.push(Move::normal(from, one));

                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.board.is_empty(two) {
                            moves.push(Move::normal(from, two));
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            let Some(target) = from.offset(dir, d_col) else {
                continue;
            };
            if let Some((occupant, _)) = self.board.get(target) {
                if occupant != color {
                    moves.push(Move::normal(from, target));
                }
            }
        }
    }
}
