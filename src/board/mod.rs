//! Chess position representation and move logic.
//!
//! A [`Position`] is an immutable value: a mailbox board, the side to
//! play, castling rights, and the file of a pawn that just double-stepped.
//! It enumerates pseudo-legal moves, applies a move to produce a new
//! position, and scores material.
//!
//! Not implemented: check and checkmate detection, king safety when
//! castling, en passant, promotion, and draw rules. Generated moves may
//! leave the mover's own king attacked; see [`CHECKS_KING_SAFETY`].
//!
//! # Example
//! ```
//! use chess_position::board::Position;
//!
//! let position = Position::new();
//! let moves = position.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let next = position.apply(moves[0]).expect("generated moves apply");
//! assert_eq!(next.material_score(), 0);
//! ```

mod builder;
mod error;
mod eval;
mod fen;
mod make_move;
mod movegen;
mod notation;
pub mod prelude;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, MoveParseError, SearchError, SquareError};
pub use fen::STARTING_FEN;
pub use movegen::CHECKS_KING_SAFETY;
pub use search::{best_move, SearchResult};
pub use state::{Board, Cell, Position};
pub use types::{CastleSide, CastlingRights, Color, Move, Piece, Square};

/// Every pseudo-legal move of the side to play, in board order.
#[must_use]
pub fn legal_moves(position: &Position) -> Vec<Move> {
    position.legal_moves()
}

/// The position after `mv`; `position` itself is unchanged.
pub fn apply(position: &Position, mv: Move) -> Result<Position, MoveError> {
    position.apply(mv)
}

/// Material balance, positive when White is ahead.
#[must_use]
pub fn material_score(position: &Position) -> i32 {
    position.material_score()
}

/// Display text for `mv`, read from the position before it is played.
#[must_use]
pub fn format_move(position: &Position, mv: Move) -> String {
    position.format_move(mv)
}
