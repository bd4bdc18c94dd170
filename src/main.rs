use std::env;
use std::fs;
use std::process;
use std::time::Instant;

use sudoku_backtrack::Sudoku;

fn main() {
    let mut args = env::args().skip(1);
    let input_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: sudoku-backtrack <puzzle-file> [solution-file]");
            process::exit(2);
        }
    };
    let output_path = args.next();

    let text = match fs::read_to_string(&input_path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {}", input_path, err);
            process::exit(1);
        }
    };

    let puzzle = match Sudoku::from_str_grid(&text) {
        Ok(sudoku) => sudoku,
        Err(err) => {
            eprintln!("invalid puzzle in {}: {}", input_path, err);
            process::exit(1);
        }
    };

    println!("{}\n", puzzle);
    println!("empty cells: {}", 81 - puzzle.n_clues());

    let mut sudoku = puzzle;
    let start = Instant::now();
    let solved = sudoku.solve();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    if !solved {
        eprintln!("no solution exists");
        eprintln!("search time: {:.3} ms", elapsed_ms);
        process::exit(1);
    }

    println!("\n{}\n", sudoku);
    println!("search time: {:.3} ms", elapsed_ms);
    println!("search steps: {}", puzzle.count_steps());

    if let Some(path) = output_path {
        if let Err(err) = fs::write(&path, sudoku.to_str_grid().as_bytes()) {
            eprintln!("cannot write {}: {}", path, err);
            process::exit(1);
        }
        println!("solution written to {}", path);
    }
}
