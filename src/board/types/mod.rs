//! Core chess types.
//!
//! This module contains the fundamental value types of a position:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, col) board coordinate
//! - `Move` and `CastleSide` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{CastleSide, Move};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use castling::castle_bit;
