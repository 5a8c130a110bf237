use std::str::FromStr;

use super::error::FenError;
use super::types::castle_bit;
use super::{Board, CastlingRights, Color, Piece, Position, Square};

/// FEN of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The first four fields are required. Only the file of the en passant
    /// square is kept, as the pawn-boost file. Move counters are accepted
    /// and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let side_to_play = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling = 0u8;
        if parts[2] != "-" {
            for c in parts[2].chars() {
                castling |= castle_bit(c).ok_or(FenError::InvalidCastling { char: c })?;
            }
        }

        let pawn_boost_file = if parts[3] == "-" {
            None
        } else {
            let square: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            Some(square.col())
        };

        Ok(Position::from_parts(
            board,
            side_to_play,
            CastlingRights::from_u8(castling),
            pawn_boost_file,
        ))
    }

    /// Write the position as FEN.
    ///
    /// The en passant square is rebuilt from the pawn-boost file: it lies
    /// behind the pawn that just double-stepped. Move counters are always
    /// `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for (row, cells) in self.board.rows().iter().enumerate() {
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some((color, piece)) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_display_char(*color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(self.side_to_play.to_char());
        fen.push(' ');
        fen.push_str(&self.castling.to_fen_field());
        fen.push(' ');
        match self.en_passant_square() {
            Some(square) => fen.push_str(&square.to_string()),
            None => fen.push('-'),
        }
        fen.push_str(" 0 1");

        fen
    }

    /// Square behind the pawn that double-stepped on the previous move
    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        let col = self.pawn_boost_file.filter(|&col| col < 8)?;
        let row = match self.side_to_play {
            // White just pushed from row 6 to row 4
            Color::Black => 5,
            Color::White => 2,
        };
        Some(Square(row, col))
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::EMPTY;
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            if col >= 8 {
                return Err(FenError::WrongFileCount {
                    rank: 8 - row,
                    files: col + 1,
                });
            }
            board.set(Square(row, col), Some((color, piece)));
            col += 1;
        }
        if col != 8 {
            return Err(FenError::WrongFileCount {
                rank: 8 - row,
                files: col,
            });
        }
    }

    Ok(board)
}
