/*

Implements the backtracking search over the empty cells of a board.

The steps are the following:
1- Find the first empty cell in row-major order
2- Try the digits 1..=9 in ascending order, checking each against the
   row, column and block of the cell
3- Place the first fitting digit and recurse on the remaining grid
4- If the recursion fails, reset the cell to empty and continue with the
   next digit
5- A grid without empty cells is solved; a cell where no digit fits makes
   the current branch unsolvable

*/

use crate::board::positions::{col, row};
use crate::board::Sudoku;

/// Attempts to fill in the sudoku, returns true on success.
pub(crate) fn solve(sudoku: &mut Sudoku) -> bool {
    let cell = match find_empty(sudoku) {
        Some(cell) => cell,
        None => return true,
    };
    let (row, col) = (row(cell), col(cell));

    for digit in 1..=9 {
        if sudoku.is_valid_placement(row, col, digit) {
            sudoku.0[cell as usize] = digit;
            if solve(sudoku) {
                return true;
            }
            sudoku.0[cell as usize] = 0;
        }
    }

    false
}

/// Runs the identical search on a throwaway copy, counting every invocation
/// of the recursive procedure.
pub(crate) fn count_steps(sudoku: Sudoku) -> usize {
    let mut copy = sudoku;
    let mut steps = 0;
    solve_counted(&mut copy, &mut steps);
    steps
}

fn solve_counted(sudoku: &mut Sudoku, steps: &mut usize) -> bool {
    *steps += 1;

    let cell = match find_empty(sudoku) {
        Some(cell) => cell,
        None => return true,
    };
    let (row, col) = (row(cell), col(cell));

    for digit in 1..=9 {
        if sudoku.is_valid_placement(row, col, digit) {
            sudoku.0[cell as usize] = digit;
            if solve_counted(sudoku, steps) {
                return true;
            }
            sudoku.0[cell as usize] = 0;
        }
    }

    false
}

// First cell without a digit in row-major order. The scan order is the
// tie-break rule of the whole search and must stay fixed.
fn find_empty(sudoku: &Sudoku) -> Option<u8> {
    sudoku.0.iter().position(|&num| num == 0).map(|cell| cell as u8)
}
