//! Errors that may be encountered when building or validating a sudoku
use std::fmt;

#[cfg(doc)]
use crate::Sudoku;

/// Error for the grid parsers, [`Sudoku::from_str_grid`] and
/// [`Sudoku::from_str_grid_permissive`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum GridParseError {
    /// A data line does not contain exactly 9 characters. Strict parser only.
    #[error("line {line} contains {len} characters, expected 9")]
    MalformedLine {
        /// 1-based line number in the input text, blank lines included
        line: usize,
        /// number of characters actually found
        len: usize,
    },
    /// A character outside `0-9` and `.` was found. Strict parser only.
    #[error("line {line} contains the invalid character {ch:?}")]
    InvalidCharacter {
        /// 1-based line number in the input text, blank lines included
        line: usize,
        /// the offending character
        ch: char,
    },
    /// The input did not yield exactly 9 data lines.
    #[error("input contains {0} grid rows, expected 9")]
    WrongRowCount(usize),
    /// The parsed grid repeats a digit within a house. Strict parser only.
    #[error(transparent)]
    DuplicateDigit(#[from] DuplicateDigit),
}

/// Error for [`Sudoku::validate`]: a clue occurs twice within one house.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[error("digit {digit} appears twice in {house}")]
pub struct DuplicateDigit {
    /// the repeated digit, 1..=9
    pub digit: u8,
    /// the row, column or block containing the repetition
    pub house: House,
}

/// One of the 27 units of the grid that must hold pairwise distinct digits.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum House {
    /// Row index from 0..=8, topmost row is 0
    Row(u8),
    /// Column index from 0..=8, leftmost col is 0
    Col(u8),
    /// Block index from 0..=8, numbering from left to right, top to bottom
    Block(u8),
}

impl House {
    // houses are numbered rows 0-8, cols 9-17, blocks 18-26
    pub(crate) fn from_index(idx: u8) -> House {
        match idx {
            0..=8 => House::Row(idx),
            9..=17 => House::Col(idx - 9),
            _ => House::Block(idx - 18),
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            House::Row(idx) => write!(f, "row {}", idx),
            House::Col(idx) => write!(f, "column {}", idx),
            House::Block(idx) => write!(f, "block {}", idx),
        }
    }
}

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains cell values >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains cell values >9
    #[error(transparent)]
    FromBytesError(#[from] FromBytesError),
}
