//! The sudoku board and its index helpers
mod sudoku;

pub(crate) mod positions;

pub use self::sudoku::{GridString, Iter, Sudoku};
