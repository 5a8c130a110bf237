//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_position::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.side_to_play(), Color::White);
//! ```

pub use super::{
    best_move, Board, CastleSide, CastlingRights, Color, FenError, Move, MoveError, Piece,
    Position, PositionBuilder, SearchError, Square,
};
