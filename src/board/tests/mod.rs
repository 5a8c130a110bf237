//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move generation per piece, ordering, castling candidates
//! - `apply.rs` - Applying moves: placement, rights, turn and boost marker
//! - `perft.rs` - Move tree counts for known positions
//! - `edge_cases.rs` - Unusual positions and unchecked rules
//! - `proptest.rs` - Property-based tests over random playouts

mod edge_cases;
mod proptest;

use crate::board::Move;

/// Render moves as coordinate text for compact comparisons
pub(super) fn notation(moves: &[Move]) -> Vec<String> {
    moves.iter().map(ToString::to_string).collect()
}
