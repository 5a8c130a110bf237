//! Move types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// Which flank a castling move goes to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Short castling, toward the h-file
    Kingside,
    /// Long castling, toward the a-file
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Column of the rook's home square on this flank
    #[inline]
    #[must_use]
    pub const fn rook_home_col(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Standard notation (`O-O` / `O-O-O`)
    #[inline]
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::Kingside => "O-O",
            CastleSide::Queenside => "O-O-O",
        }
    }
}

/// A move for the side to play.
///
/// Either a plain piece move between two squares, which captures
/// whatever stands on `to`, or a castling tag. Castling carries no
/// color: it always belongs to the side currently to play.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Normal { from: Square, to: Square },
    Castle(CastleSide),
}

impl Move {
    /// Create a plain move between two squares
    #[inline]
    #[must_use]
    pub const fn normal(from: Square, to: Square) -> Self {
        Move::Normal { from, to }
    }

    /// Create a plain move from raw (row, col) coordinates
    #[inline]
    #[must_use]
    pub const fn from_coords(from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> Self {
        Move::Normal {
            from: Square(from_row, from_col),
            to: Square(to_row, to_col),
        }
    }

    #[inline]
    #[must_use]
    pub const fn castle(side: CastleSide) -> Self {
        Move::Castle(side)
    }

    /// Origin square, `None` for castling
    #[inline]
    #[must_use]
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Normal { from, .. } => Some(from),
            Move::Castle(_) => None,
        }
    }

    /// Destination square, `None` for castling
    #[inline]
    #[must_use]
    pub const fn to(self) -> Option<Square> {
        match self {
            Move::Normal { to, .. } => Some(to),
            Move::Castle(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self, Move::Castle(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Normal { from, to } => write!(f, "{from}{to}"),
            Move::Castle(side) => f.write_str(side.notation()),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse `e2e4`-style coordinates or a castling tag (`O-O`, `O-O-O`,
    /// zeros accepted in place of the letter O).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('0', "O").as_str() {
            "O-O" => return Ok(Move::Castle(CastleSide::Kingside)),
            "O-O-O" => return Ok(Move::Castle(CastleSide::Queenside)),
            _ => {}
        }

        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }

        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid())?;
        Ok(Move::Normal { from, to })
    }
}
