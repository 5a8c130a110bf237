//! Square type and coordinate utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, col).
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1; col 0 is the
/// a-file. The fields are public so callers can describe any coordinate,
/// including ones off the board; [`Square::is_on_board`] tells them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the col (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Step by a (row, col) delta, returning `None` off the board
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.0 as isize + d_row;
        let col = self.1 as isize + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// File letter ('a'-'h'), `None` past the h-file
    #[inline]
    #[must_use]
    pub fn file_char(self) -> Option<char> {
        b"abcdefgh".get(self.1).map(|&b| b as char)
    }

    /// Rank number (1-8), `None` below rank 1
    #[inline]
    #[must_use]
    pub fn rank(self) -> Option<usize> {
        if self.0 < 8 {
            Some(8 - self.0)
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file_char(), self.rank()) {
            (Some(file), Some(rank)) => write!(f, "{file}{rank}"),
            _ => write!(f, "({}, {})", self.0, self.1),
        }
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn test_square_display() {
        assert_eq!(Square(7, 0).to_string(), "a1");
        assert_eq!(Square(0, 7).to_string(), "h8");
        assert_eq!(Square(6, 4).to_string(), "e2");
        assert_eq!(Square(4, 4).to_string(), "e4");
        assert_eq!(Square(9, 1).to_string(), "(9, 1)");
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("a1".parse::<Square>(), Ok(Square(7, 0)));
        assert_eq!("h8".parse::<Square>(), Ok(Square(0, 7)));
        assert_eq!("e4".parse::<Square>(), Ok(Square(4, 4)));
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a1b".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_try_from() {
        assert_eq!(Square::try_from((3, 4)), Ok(Square(3, 4)));
        assert_eq!(
            Square::try_from((8, 4)),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Square::try_from((0, 12)),
            Err(SquareError::ColOutOfBounds { col: 12 })
        );
    }

    #[test]
    fn test_file_and_rank_off_board() {
        assert_eq!(Square(7, 0).file_char(), Some('a'));
        assert_eq!(Square(0, 7).rank(), Some(8));
        assert_eq!(Square(0, 200).file_char(), None);
        assert_eq!(Square(0, 200).rank(), Some(8));
        assert_eq!(Square(9, 0).rank(), None);
        assert_eq!(Square(9, 0).file_char(), Some('a'));
        assert_eq!(Square(0, 200).to_string(), "(0, 200)");
    }

    #[test]
    fn test_offset_stops_at_edge() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(0, 0).offset(0, -1), None);
        assert_eq!(Square(7, 7).offset(1, 1), None);
        assert_eq!(Square(4, 4).offset(-2, 1), Some(Square(2, 5)));
    }
}
