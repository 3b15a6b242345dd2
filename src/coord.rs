//! Textual coordinates such as `A1`: column letter first, 1-based row second.

use alloc::string::String;
use core::fmt;

use crate::common::CoordError;
use crate::config::Bounds;

/// Zero-based board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse `input` against `bounds`. Surrounding whitespace and letter case
    /// are ignored; anything else that is not `<letter><digits>` inside the
    /// board is rejected.
    pub fn parse(input: &str, bounds: Bounds) -> Result<Self, CoordError> {
        let normalized = normalize(input);
        let mut chars = normalized.chars();
        let col_ch = chars.next().ok_or(CoordError::InvalidFormat)?;
        if !col_ch.is_ascii_uppercase() {
            return Err(CoordError::InvalidFormat);
        }
        let col = (col_ch as u8 - b'A') as usize;
        if col >= bounds.cols() {
            return Err(CoordError::InvalidFormat);
        }

        let row_str = chars.as_str();
        if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoordError::InvalidFormat);
        }
        let row: usize = row_str.parse().map_err(|_| CoordError::InvalidFormat)?;
        if row == 0 || row > bounds.rows() {
            return Err(CoordError::InvalidFormat);
        }
        Ok(Self::new(row - 1, col))
    }

    /// Bottom-right corner of `bounds`, e.g. `H8` on the minimum board.
    pub fn max_for(bounds: Bounds) -> Self {
        Self::new(bounds.rows() - 1, bounds.cols() - 1)
    }

    pub fn column_letter(&self) -> char {
        column_letter(self.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row + 1)
    }
}

/// Letter naming zero-based column `col`.
pub fn column_letter(col: usize) -> char {
    debug_assert!(col < 26);
    (b'A' + col as u8) as char
}

/// Trimmed, upper-cased form of raw player input.
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}
