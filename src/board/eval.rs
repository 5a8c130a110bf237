use super::{Board, Position};

impl Board {
    /// Sum of piece values, White positive and Black negative
    #[must_use]
    pub fn material(&self) -> i32 {
        self.occupied()
            .map(|(_, color, piece)| color.sign() * piece.value())
            .sum()
    }
}

impl Position {
    /// Material balance from White's point of view.
    ///
    /// Pawn 1, knight 3, bishop 3, rook 5, queen 9, king 0. There is no
    /// positional, mobility or mate term.
    #[must_use]
    pub fn material_score(&self) -> i32 {
        self.board.material()
    }
}
