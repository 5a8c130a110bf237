use super::{CastleSide, Move, MoveError, Piece, Position, Square};

impl Position {
    /// Play `mv` and return the resulting position.
    ///
    /// `self` is left untouched. The side to play always flips. A plain
    /// move lifts whatever stands on the origin and drops it on the
    /// destination, replacing any occupant there; no color or legality
    /// check is made. Castling is applied blindly on the mover's back row.
    ///
    /// Castling rights of the mover are dropped when its king moves, and
    /// one right is dropped when a move starts on that flank's rook home
    /// square, whatever piece made it. Capturing a rook on its home square
    /// leaves the opponent's right in place.
    ///
    /// # Errors
    ///
    /// [`MoveError::OffBoard`] if either square lies outside the board and
    /// [`MoveError::EmptyOrigin`] if the origin holds no piece.
    pub fn apply(&self, mv: Move) -> Result<Position, MoveError> {
        let next = match mv {
            Move::Castle(side) => self.play_castle(side),
            Move::Normal { from, to } => {
                for square in [from, to] {
                    if !square.is_on_board() {
                        return Err(MoveError::OffBoard { square });
                    }
                }
                let (_, piece) = self
                    .board
                    .get(from)
                    .ok_or(MoveError::EmptyOrigin { square: from })?;
                self.play_normal(from, to, piece)
            }
        };

        #[cfg(feature = "logging")]
        log::trace!(
            "applied {} for {}, castling {}, boost {:?}",
            mv,
            self.side_to_play,
            next.castling.to_fen_field(),
            next.pawn_boost_file
        );

        Ok(next)
    }

    /// Parse `e2e4` / `O-O` / `O-O-O`, require it among the generated
    /// moves, and apply it.
    pub fn apply_uci(&self, text: &str) -> Result<Position, MoveError> {
        let mv: Move = text.parse()?;
        if !self.legal_moves().contains(&mv) {
            return Err(MoveError::NotGenerated {
                notation: text.to_string(),
            });
        }
        self.apply(mv)
    }

    fn play_castle(&self, side: CastleSide) -> Position {
        let color = self.side_to_play;
        let row = color.back_row();
        let mut next = self.successor();

        next.castling.remove_color(color);
        next.board.clear(Square(row, 4));
        let (king_col, rook_col) = match side {
            CastleSide::Queenside => (2, 3),
            CastleSide::Kingside => (6, 5),
        };
        next.board.clear(Square(row, side.rook_home_col()));
        next.board.set(Square(row, king_col), Some((color, Piece::King)));
        next.board.set(Square(row, rook_col), Some((color, Piece::Rook)));

        next
    }

    fn play_normal(&self, from: Square, to: Square, piece: Piece) -> Position {
        let color = self.side_to_play;
        let mut next = self.successor();

        let moving = next.board.get(from);
        next.board.clear(from);
        next.board.set(to, moving);

        if piece == Piece::King {
            next.castling.remove_color(color);
        }
        if from.row() == color.back_row() {
            for side in CastleSide::BOTH {
                if from.col() == side.rook_home_col() {
                    next.castling.remove(color, side);
                }
            }
        }

        if piece == Piece::Pawn && from.row().abs_diff(to.row()) == 2 {
            next.pawn_boost_file = Some(from.col());
        }

        next
    }

    /// Copy of `self` with the turn passed and the boost marker reset
    fn successor(&self) -> Position {
        Position {
            side_to_play: self.side_to_play.opponent(),
            pawn_boost_file: None,
            ..*self
        }
    }
}

