//! Thin example binary: reads nonogram-db-formatted puzzle files, solves
//! each one, and prints the result. Deliberately not a CLI, no argument
//! parser, per `spec.md` §1's Non-goal (batch/CLI orchestration lives in
//! an external collaborator).

use std::env;
use std::fs::File;
use std::num::NonZeroUsize;

use nonogram_core::{solve, Grid, Parser, SolveOptions};

fn go(path: &str) {
    let Ok(file) = File::open(path) else {
        eprintln!("Cannot read {path}");
        return;
    };
    let mut file = file;
    let puzzle = match Parser::new().parse(&mut file) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{path}: {e}");
            return;
        }
    };

    let options = SolveOptions {
        k: NonZeroUsize::new(2).unwrap(),
    };
    match solve(&puzzle.rows, &puzzle.cols, options) {
        Ok(solutions) => match solutions.as_slice() {
            [] => println!("{path}: no solution"),
            [grid] => {
                println!("{path}: unique solution");
                print_grid(grid);
            }
            grids => {
                println!("{path}: {} solutions found (not unique)", grids.len());
                print_grid(&grids[0]);
            }
        },
        Err(e) => eprintln!("{path}: {e}"),
    }
}

fn print_grid(grid: &Grid) {
    print!("{}", grid.as_text());
}

fn main() {
    tracing_subscriber::fmt::init();

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: nonogram-core <puzzle-file>...");
        return;
    }
    for path in paths {
        go(&path);
    }
}
