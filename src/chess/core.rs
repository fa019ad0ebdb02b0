//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::ops::{Add, Mul, Not, Sub};

use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: i32 = 8;

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Row offset of a single pawn push: White pawns move towards row 0 (rank
    /// 8), Black pawns towards row 7 (rank 1).
    #[must_use]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "white",
            Self::Black => "black",
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Algebraic symbol of the piece (uppercase). Pawns don't have one in SAN
    /// but 'P' is used for the board rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pawn => "pawn",
            Self::Rook => "rook",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
        })
    }
}

/// Represents a specific piece owned by a player. Pieces are never mutated:
/// moving or capturing replaces the contents of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub kind: PieceKind,
    #[allow(missing_docs)]
    pub color: Color,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

impl fmt::Display for Piece {
    /// White pieces are uppercase, Black pieces are lowercase (same as FEN).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.symbol();
        f.write_char(match self.color {
            Color::White => symbol,
            Color::Black => symbol.to_ascii_lowercase(),
        })
    }
}

/// Cell on the board addressed by `row` and `col`. Row 0 is rank 8 (Black's
/// back rank) and row 7 is rank 1; column 0 is file 'a':
///
/// ```
/// use chess_console::chess::core::Coordinate;
///
/// assert_eq!(Coordinate::try_from("a8").unwrap(), Coordinate::new(0, 0));
/// assert_eq!(Coordinate::try_from("a2").unwrap(), Coordinate::new(6, 0));
/// assert_eq!(Coordinate::try_from("h1").unwrap(), Coordinate::new(7, 7));
/// ```
///
/// Coordinates are signed and unconstrained so that callers can express
/// off-board cells; every board access checks [`Coordinate::in_bounds`] first.
/// The same type doubles as an offset between two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    #[allow(missing_docs)]
    pub row: i32,
    #[allow(missing_docs)]
    pub col: i32,
}

impl Coordinate {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether the cell lies within the 8x8 board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        0 <= self.row && self.row < BOARD_WIDTH && 0 <= self.col && self.col < BOARD_WIDTH
    }

    /// Unit step (each component in -1..=1) pointing in the same direction.
    #[must_use]
    pub const fn signum(self) -> Self {
        Self::new(self.row.signum(), self.col.signum())
    }

    /// Grid indices for in-bounds coordinates.
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        if !self.in_bounds() {
            return None;
        }
        Some((usize::try_from(self.row).ok()?, usize::try_from(self.col).ok()?))
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new(self.row * rhs, self.col * rhs)
    }
}

/// Errors produced while reading a coordinate in algebraic notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    /// Coordinate is not exactly two characters long.
    #[error("invalid coordinate format")]
    InvalidFormat,
    /// File is not within 'a'..='h' or rank is not within '1'..='8'.
    #[error("coordinate out of bounds")]
    OutOfBounds,
}

impl TryFrom<&str> for Coordinate {
    type Error = CoordinateError;

    /// Parses a file letter followed by a rank digit, e.g. "e4". Input is
    /// case-insensitive.
    fn try_from(square: &str) -> Result<Self, Self::Error> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            return Err(CoordinateError::InvalidFormat);
        };
        let col = match file.to_ascii_lowercase() {
            file @ 'a'..='h' => i32::from(file as u8 - b'a'),
            _ => return Err(CoordinateError::OutOfBounds),
        };
        let rank = match rank {
            rank @ '1'..='8' => i32::from(rank as u8 - b'0'),
            _ => return Err(CoordinateError::OutOfBounds),
        };
        Ok(Self::new(BOARD_WIDTH - rank, col))
    }
}

impl fmt::Display for Coordinate {
    /// Algebraic notation for on-board cells, raw `(row, col)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index() {
            Some((row, col)) => {
                // Indices are within 0..8 here.
                #[allow(clippy::cast_possible_truncation)]
                let (file, rank) = ((b'a' + col as u8) as char, BOARD_WIDTH as usize - row);
                write!(f, "{file}{rank}")
            },
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
