//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_position::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_play(Color::White)
//!     .build();
//! assert_eq!(position.legal_moves().len(), 7);
//! ```

use super::{Board, CastleSide, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing [`Position`] values.
///
/// Starts from an empty board, White to play, no castling rights.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_play: Color,
    castling: CastlingRights,
    pawn_boost_file: Option<usize>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty position builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::EMPTY,
            side_to_play: Color::White,
            castling: CastlingRights::none(),
            pawn_boost_file: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::STARTING,
            castling: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing any occupant.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set(square, Some((color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    /// Replace the whole board.
    #[must_use]
    pub const fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    #[must_use]
    pub const fn side_to_play(mut self, color: Color) -> Self {
        self.side_to_play = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling.set(color, CastleSide::Kingside);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling.set(color, CastleSide::Queenside);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Record that the pawn on `file` double-stepped last move.
    ///
    /// A file past the h-file is dropped by [`PositionBuilder::build`].
    #[must_use]
    pub const fn pawn_boost_file(mut self, file: usize) -> Self {
        self.pawn_boost_file = Some(file);
        self
    }

    #[must_use]
    pub const fn build(self) -> Position {
        Position::from_parts(
            self.board,
            self.side_to_play,
            self.castling,
            self.pawn_boost_file,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        assert_eq!(PositionBuilder::starting_position().build(), Position::new());
    }

    #[test]
    fn test_piece_replaces_occupant() {
        let pos = PositionBuilder::starting_position()
            .piece(Square(7, 3), Color::Black, Piece::Knight)
            .build();
        assert_eq!(pos.piece_at(Square(7, 3)), Some((Color::Black, Piece::Knight)));
    }

    #[test]
    fn test_clear_square() {
        let pos = PositionBuilder::starting_position()
            .clear(Square(6, 4))
            .build();
        assert_eq!(pos.piece_at(Square(6, 4)), None);
    }

    #[test]
    fn test_castling_flags() {
        let pos = PositionBuilder::new()
            .castle_kingside(Color::White)
            .castle_queenside(Color::Black)
            .build();
        assert_eq!(pos.castling_rights().to_fen_field(), "Kq");

        let pos = PositionBuilder::starting_position()
            .no_castling_rights()
            .build();
        assert_eq!(pos.castling_rights(), CastlingRights::none());
    }

    #[test]
    fn test_side_and_boost() {
        let pos = PositionBuilder::new()
            .side_to_play(Color::Black)
            .pawn_boost_file(3)
            .build();
        assert_eq!(pos.side_to_play(), Color::Black);
        assert_eq!(pos.pawn_boost_file(), Some(3));
    }

    #[test]
    fn test_boost_file_off_board_is_dropped() {
        let pos = PositionBuilder::new().pawn_boost_file(8).build();
        assert_eq!(pos.pawn_boost_file(), None);
        assert_eq!(pos, PositionBuilder::new().build());
    }
}
