use std::ops::Deref;
use std::{fmt, iter, slice, str};

use crate::board::positions::{cell_at, CELLS_BY_HOUSE};
use crate::consts::N_CELLS;
use crate::errors::{
    DuplicateDigit, FromBytesError, FromBytesSliceError, GridParseError, House,
};
use crate::solver;

/// The main structure exposing all the functionality of the library
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

/// Iterator over the cells of a sudoku, left to right, top to bottom.
pub type Iter<'a> = iter::Map<slice::Iter<'a, u8>, fn(&u8) -> Option<u8>>;

impl Sudoku {
    /// Creates a sudoku from a byte array. Empty cells are denoted by 0,
    /// clues by their digit.
    ///
    /// The grid is not rule-validated. Use [`validate`](Sudoku::validate) to
    /// check for duplicate clues.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        match bytes.iter().all(|&num| num <= 9) {
            true => Ok(Sudoku(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a sudoku from a byte slice of length 81. Empty cells are
    /// denoted by 0, clues by their digit.
    ///
    /// The grid is not rule-validated. Use [`validate`](Sudoku::validate) to
    /// check for duplicate clues.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut grid = [0; N_CELLS];
        grid.copy_from_slice(bytes);
        Ok(Sudoku::from_bytes(grid)?)
    }

    /// Creates a sudoku from a 9-line grid over the characters `0-9` and `.`,
    /// where `0` and `.` both mark an empty cell.
    ///
    /// Lines that are empty after trimming whitespace are skipped; every
    /// other line must contain exactly 9 grid characters and exactly 9 such
    /// data lines must be present. The parsed grid is rule-validated before
    /// it is returned, so a sudoku from this constructor is always a legal
    /// starting position.
    pub fn from_str_grid(s: &str) -> Result<Sudoku, GridParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_rows = 0;

        for (line_nr, line) in (1..).zip(s.lines()) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let len = line.chars().count();
            if len != 9 {
                return Err(GridParseError::MalformedLine { line: line_nr, len });
            }

            for (col, ch) in (0..9).zip(line.chars()) {
                let num = match ch {
                    '0' | '.' => 0,
                    '1'..='9' => ch as u8 - b'0',
                    _ => return Err(GridParseError::InvalidCharacter { line: line_nr, ch }),
                };
                if n_rows < 9 {
                    grid[cell_at(n_rows as u8, col) as usize] = num;
                }
            }
            n_rows += 1;
        }

        if n_rows != 9 {
            return Err(GridParseError::WrongRowCount(n_rows));
        }

        let sudoku = Sudoku(grid);
        sudoku.validate()?;
        Ok(sudoku)
    }

    /// Creates a sudoku from text in the same alphabet, but forgiving: every
    /// character other than `1-9`, `0` and `.` is dropped, lines that do not
    /// yield exactly 9 cells are skipped entirely and no rule validation is
    /// performed.
    ///
    /// This accepts grids decorated with block separators or comments.
    /// Callers that need the duplicate check must run
    /// [`validate`](Sudoku::validate) themselves.
    pub fn from_str_grid_permissive(s: &str) -> Result<Sudoku, GridParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_rows = 0;

        for line in s.lines() {
            let mut cells = [0; 9];
            let mut n_cells = 0;
            for ch in line.chars() {
                let num = match ch {
                    '0' | '.' => 0,
                    '1'..='9' => ch as u8 - b'0',
                    _ => continue,
                };
                if n_cells < 9 {
                    cells[n_cells] = num;
                }
                n_cells += 1;
            }

            if n_cells != 9 {
                continue;
            }
            if n_rows < 9 {
                grid[n_rows * 9..n_rows * 9 + 9].copy_from_slice(&cells);
            }
            n_rows += 1;
        }

        match n_rows {
            9 => Ok(Sudoku(grid)),
            n => Err(GridParseError::WrongRowCount(n)),
        }
    }

    /// Checks that no digit occurs twice within any row, column or block.
    /// Empty cells are exempt.
    ///
    /// Houses are scanned rows first, then columns, then blocks; the error
    /// reports the first duplicate found in that order. Callers should not
    /// rely on which of several duplicates is reported, only that one is.
    pub fn validate(&self) -> Result<(), DuplicateDigit> {
        for (house, cells) in CELLS_BY_HOUSE.iter().enumerate() {
            let mut seen = 0u16;
            for &cell in cells {
                let num = self.0[cell as usize];
                if num == 0 {
                    continue;
                }
                if seen & 1 << num != 0 {
                    return Err(DuplicateDigit {
                        digit: num,
                        house: House::from_index(house as u8),
                    });
                }
                seen |= 1 << num;
            }
        }
        Ok(())
    }

    /// Returns true if `digit` can be placed at `(row, col)` without an equal
    /// digit already present in the same row, column or block.
    ///
    /// The target cell is assumed to be empty and is not inspected
    /// separately. Scans at most 27 cells and never allocates.
    ///
    /// # Panics
    ///
    /// panics if `row >= 9`, `col >= 9` or `!(1..=9).contains(&digit)`
    pub fn is_valid_placement(&self, row: u8, col: u8, digit: u8) -> bool {
        assert!(row < 9 && col < 9);
        assert!(0 < digit && digit < 10);

        for c in 0..9 {
            if self.0[cell_at(row, c) as usize] == digit {
                return false;
            }
        }
        for r in 0..9 {
            if self.0[cell_at(r, col) as usize] == digit {
                return false;
            }
        }

        let band = row - row % 3;
        let stack = col - col % 3;
        for r in band..band + 3 {
            for c in stack..stack + 3 {
                if self.0[cell_at(r, c) as usize] == digit {
                    return false;
                }
            }
        }

        true
    }

    /// Try to find a solution to the sudoku and fill it in. Returns false if
    /// no solution exists; that is a regular outcome, not an error.
    ///
    /// The search is deterministic: empty cells are filled top left to bottom
    /// right and digits tried in ascending order, so equal grids always solve
    /// to equal solutions. On failure the clues are untouched and every
    /// tentatively filled cell has been reset to empty.
    pub fn solve(&mut self) -> bool {
        solver::solve(self)
    }

    /// Solves a copy of the sudoku and returns it, or `None` if no solution
    /// exists. Convenience wrapper around [`solve`](Sudoku::solve).
    pub fn solve_one(self) -> Option<Sudoku> {
        let mut sudoku = self;
        match sudoku.solve() {
            true => Some(sudoku),
            false => None,
        }
    }

    /// Counts how often the recursive search procedure runs while solving
    /// this sudoku, including the initial invocation, whether or not a
    /// solution is found.
    ///
    /// The search operates on a private copy; the sudoku itself is never
    /// mutated and the solution is discarded. This is a diagnostic, use
    /// [`solve`](Sudoku::solve) to actually obtain the solution.
    pub fn count_steps(&self) -> usize {
        solver::count_steps(*self)
    }

    /// Check whether the sudoku is solved: every cell filled and no digit
    /// repeated in any house.
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&num| num != 0) && self.validate().is_ok()
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Returns an iterator over the cells of the sudoku, going from left to
    /// right, top to bottom. Empty cells are `None`.
    pub fn iter(&self) -> Iter {
        self.0.iter().map(num_to_opt)
    }

    /// Returns a byte array of the grid, 0 for empty cells.
    pub fn to_bytes(&self) -> [u8; 81] {
        self.0
    }

    /// Renders the grid as 9 newline-terminated lines of 9 digit characters,
    /// `0` for empty cells.
    ///
    /// The exact inverse of the digit grids accepted by
    /// [`from_str_grid`](Sudoku::from_str_grid); `.` is never emitted.
    pub fn to_str_grid(&self) -> GridString {
        let mut buf = [b'\n'; 90];
        for (cell, &num) in self.0.iter().enumerate() {
            buf[cell / 9 * 10 + cell % 9] = num + b'0';
        }
        GridString(buf)
    }
}

fn num_to_opt(num: &u8) -> Option<u8> {
    if *num == 0 {
        None
    } else {
        Some(*num)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (cell, &num) in self.0.iter().enumerate() {
            match (cell / 9, cell % 9) {
                (0, 0) => (),
                (3, 0) | (6, 0) => f.write_str("\n---+---+---\n")?, // separate bands
                (_, 0) => f.write_str("\n")?,
                (_, 3) | (_, 6) => f.write_str("|")?, // separate stacks
                _ => (),
            }
            match num {
                0 => f.write_str(".")?,
                num => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

/// A sudoku grid serialized into a stack-allocated string of digit lines.
/// Dereferences to `&str`.
#[derive(Copy, Clone)]
pub struct GridString([u8; 90]);

impl Deref for GridString {
    type Target = str;

    fn deref(&self) -> &str {
        // the buffer contains nothing but ascii digits and newlines
        str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Display for GridString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self)
    }
}

impl fmt::Debug for GridString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use serde::de::{Error, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_str_grid())
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Sudoku, D::Error> {
            deserializer.deserialize_str(GridVisitor)
        }
    }

    struct GridVisitor;

    impl<'de> Visitor<'de> for GridVisitor {
        type Value = Sudoku;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a sudoku grid of 9 lines of 9 cells each")
        }

        fn visit_str<E: Error>(self, s: &str) -> Result<Sudoku, E> {
            Sudoku::from_str_grid(s).map_err(E::custom)
        }
    }
}
