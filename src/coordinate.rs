//! Validated board coordinates and the `A0`-style text grammar.

use core::fmt;
use core::str::FromStr;

use crate::common::CoordinateError;
use crate::config::BOARD_SIZE;

/// A cell position on a grid. Always in bounds once constructed.
///
/// The textual form is a column letter followed by a row digit: `C7` is
/// column 2, row 7. Letters run across the top of a rendered grid and
/// digits down the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "(usize, usize)", into = "(usize, usize)"))]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Create a coordinate from zero-based row and column indices.
    pub fn new(row: usize, col: usize) -> Result<Self, CoordinateError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(CoordinateError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Parse the two-character `LetterDigit` form, e.g. `A0` or `J9`.
    ///
    /// Only uppercase letters `A`-`J` and digits `0`-`9` are accepted, and the
    /// input must be exactly two characters long.
    pub fn parse(text: &str) -> Result<Self, CoordinateError> {
        let mut chars = text.chars();
        let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) => (letter, digit),
            _ => return Err(CoordinateError::WrongLength(text.chars().count())),
        };
        let col = column_index(letter).ok_or(CoordinateError::ColumnOutOfRange(letter))?;
        let row = digit
            .to_digit(10)
            .ok_or(CoordinateError::RowNotDigit(digit))? as usize;
        Self::new(row, col)
    }

    /// Zero-based row (the digit).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column (the letter).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate { row, col }))
    }

    /// Coordinate shifted down by `d_row` and right by `d_col`, if still on the board.
    pub(crate) fn offset(&self, d_row: usize, d_col: usize) -> Option<Coordinate> {
        let row = self.row.checked_add(d_row)?;
        let col = self.col.checked_add(d_col)?;
        Coordinate::new(row, col).ok()
    }
}

/// Column letter for a zero-based column index.
pub(crate) fn column_letter(col: usize) -> char {
    (b'A' + col as u8) as char
}

fn column_index(letter: char) -> Option<usize> {
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let col = (letter as u8 - b'A') as usize;
    (col < BOARD_SIZE).then_some(col)
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s)
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = CoordinateError;

    /// Build from a `(row, col)` pair.
    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coordinate::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.col), self.row)
    }
}
