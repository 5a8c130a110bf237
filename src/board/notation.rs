//! Display helpers: move descriptions and the ASCII board dump.

use std::fmt;

use super::{Move, Piece, Position};

const RULE: &str = "---------------------------------";

impl Position {
    /// Describe a move for display, reading the mover from this position.
    ///
    /// Castling is written `O-O` / `O-O-O`. Other moves are written
    /// `N: b1 -> c3`, with no letter for pawns (`e2 -> e4`) or when the
    /// origin is empty.
    #[must_use]
    pub fn format_move(&self, mv: Move) -> String {
        match mv {
            Move::Castle(side) => side.notation().to_string(),
            Move::Normal { from, to } => match self.board.get(from) {
                Some((_, piece)) if piece != Piece::Pawn => {
                    format!("{}: {from} -> {to}", piece.to_char().to_ascii_uppercase())
                }
                _ => format!("{from} -> {to}"),
            },
        }
    }
}

/// Rank-by-rank grid, rank 8 first. Uppercase is White, lowercase Black,
/// a space an empty square.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        for (row, cells) in self.board.rows().iter().enumerate() {
            f.write_str("|")?;
            for cell in cells {
                let c = cell.map_or(' ', |(color, piece)| piece.to_display_char(color));
                write!(f, " {c} |")?;
            }
            writeln!(f)?;
            f.write_str(RULE)?;
            if row < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
