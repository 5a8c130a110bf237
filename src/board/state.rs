#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, Piece, Square};

/// Contents of one square: a colored piece, or empty.
pub type Cell = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 grid of cells indexed `[row][col]`, row 0 being rank 8.
///
/// A plain value: copying a `Board` copies every cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board([[Cell; 8]; 8]);

impl Default for Board {
    fn default() -> Self {
        Board::EMPTY
    }
}

impl Board {
    pub const EMPTY: Board = Board([[None; 8]; 8]);

    /// The standard initial setup
    pub const STARTING: Board = {
        let mut cells = [[None; 8]; 8];
        let mut col = 0;
        while col < 8 {
            cells[0][col] = Some((Color::Black, BACK_RANK[col]));
            cells[1][col] = Some((Color::Black, Piece::Pawn));
            cells[6][col] = Some((Color::White, Piece::Pawn));
            cells[7][col] = Some((Color::White, BACK_RANK[col]));
            col += 1;
        }
        Board(cells)
    };

    #[must_use]
    pub const fn from_rows(rows: [[Cell; 8]; 8]) -> Self {
        Board(rows)
    }

    /// Contents of a square; off-board squares read as empty
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Cell {
        if square.is_on_board() {
            self.0[square.0][square.1]
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Overwrite a square. Off-board squares are ignored.
    #[inline]
    pub fn set(&mut self, square: Square, cell: Cell) {
        if square.is_on_board() {
            self.0[square.0][square.1] = cell;
        }
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.set(square, None);
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.0
    }

    /// Occupied squares in row-major order (rank 8 to 1, file a to h)
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|(color, piece)| (Square(row, col), color, piece))
            })
        })
    }
}

const STARTING_POSITION: Position =
    Position::from_parts(Board::STARTING, Color::White, CastlingRights::all(), None);

/// An immutable chess position.
///
/// Holds the board, the side to play, both colors' castling rights and
/// the file of a pawn that double-stepped on the previous move. Nothing
/// mutates a `Position` after construction; [`Position::apply`] returns a
/// new one.
///
/// The pawn-boost file is recorded for en passant, which is not
/// implemented: it is carried from move to move but never read by move
/// generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_play: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) pawn_boost_file: Option<usize>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The standard starting position, White to play
    #[must_use]
    pub const fn new() -> Self {
        STARTING_POSITION
    }

    /// Assemble a position from its parts without validation.
    ///
    /// Kings are not counted and castling rights are not checked against
    /// where the kings and rooks stand. A pawn-boost file past the h-file
    /// is dropped, so every position can be written as FEN and read back.
    #[must_use]
    pub const fn from_parts(
        board: Board,
        side_to_play: Color,
        castling: CastlingRights,
        pawn_boost_file: Option<usize>,
    ) -> Self {
        let pawn_boost_file = match pawn_boost_file {
            Some(file) if file < 8 => Some(file),
            _ => None,
        };
        Position {
            board,
            side_to_play,
            castling,
            pawn_boost_file,
        }
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn side_to_play(&self) -> Color {
        self.side_to_play
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// File of the pawn that double-stepped on the previous move, if any
    #[inline]
    #[must_use]
    pub const fn pawn_boost_file(&self) -> Option<usize> {
        self.pawn_boost_file
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Cell {
        self.board.get(square)
    }
}
