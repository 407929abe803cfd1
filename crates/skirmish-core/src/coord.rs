//! Board coordinate representation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of columns and rows on the board.
pub const BOARD_SIZE: u8 = 8;

/// Error returned when a coordinate string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid coordinate '{0}': expected a letter a-h followed by a digit 1-8")]
pub struct CoordError(pub String);

/// A cell on the board, indexed 0-63.
///
/// Cells are indexed row by row starting from the first column:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
///
/// The letter names the column and the digit names the row, so `c4` is
/// column 2, row 3.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord(u8);

impl Coord {
    /// Creates a coordinate from a column and row, both in 0-7.
    #[inline]
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Coord(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Creates a coordinate from its index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Coord(index))
        } else {
            None
        }
    }

    /// Parses a coordinate from its text form (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].to_ascii_lowercase();
        let row = bytes[1];
        if col < b'a' || col > b'h' || row < b'1' || row > b'8' {
            return None;
        }
        Coord::new(col - b'a', row - b'1')
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Returns the coordinate `dx` columns and `dy` rows away, or `None`
    /// when that leaves the board. Never wraps around an edge.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let col = self.col() as i16 + dx as i16;
        let row = self.row() as i16 + dy as i16;
        if col < 0 || row < 0 || col >= BOARD_SIZE as i16 || row >= BOARD_SIZE as i16 {
            return None;
        }
        Coord::new(col as u8, row as u8)
    }

    /// Returns the text form of this coordinate.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }

    /// Iterates over all 64 cells in index order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Coord)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self.to_algebraic())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::from_algebraic(s).ok_or_else(|| CoordError(s.to_string()))
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
