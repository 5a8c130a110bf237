pub mod board;

pub use board::{Board, CastleSide, CastlingRights, Color, Move, Piece, Position, Square};
