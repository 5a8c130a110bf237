mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Move, MoveError, Piece, Position, Square};

/// Whether move generation rejects moves that leave the mover's king
/// attacked. It does not: every generated move is pseudo-legal, castling
/// through or out of check included, and checkmate is never detected.
pub const CHECKS_KING_SAFETY: bool = false;

impl Position {
    /// Every pseudo-legal move for the side to play.
    ///
    /// Squares are visited row by row from rank 8 to rank 1, file a to h,
    /// and each piece of the side to play contributes its moves in turn.
    /// Only board edges and blocking pieces restrict the result; see
    /// [`CHECKS_KING_SAFETY`].
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for (from, color, piece) in self.board.occupied() {
            if color == self.side_to_play {
                self.generate_piece_moves(from, piece, &mut moves);
            }
        }
        moves
    }

    /// Moves of the piece standing on `from`, if it belongs to the side to play
    #[must_use]
    pub fn moves_from(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        if let Some((color, piece)) = self.board.get(from) {
            if color == self.side_to_play {
                self.generate_piece_moves(from, piece, &mut moves);
            }
        }
        moves
    }

    fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut Vec<Move>) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, moves),
            Piece::Knight => self.generate_knight_moves(from, moves),
            Piece::Bishop => self.generate_bishop_moves(from, moves),
            Piece::Rook => self.generate_rook_moves(from, moves),
            Piece::Queen => self.generate_queen_moves(from, moves),
            Piece::King => self.generate_king_moves(from, moves),
        }
    }

    /// True if a generated move lands on an occupied square
    #[must_use]
    pub fn is_capture(&self, mv: Move) -> bool {
        mv.to().is_some_and(|to| !self.board.is_empty(to))
    }

    /// Count leaf nodes of the pseudo-legal move tree.
    pub fn perft(&self, depth: usize) -> Result<u64, MoveError> {
        if depth == 0 {
            return Ok(1);
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return Ok(moves.len() as u64);
        }

        let mut nodes = 0;
        for mv in moves {
            nodes += self.apply(mv)?.perft(depth - 1)?;
        }
        Ok(nodes)
    }
}
