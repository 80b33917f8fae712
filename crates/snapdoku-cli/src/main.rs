//! Command-line sudoku solver.
//!
//! Reads a puzzle file (81 whitespace-delimited tokens, digits 1-9 for
//! givens and '.' for blanks), solves it, and prints the resulting grid.
//! Exits zero on a successful solve and non-zero for argument errors,
//! unreadable or malformed input, and puzzles without a solution.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use snapdoku_solver::{LogTracer, SolveError, Solver};

mod input;

/// Solve a 9x9 sudoku puzzle read from a file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the puzzle file: 81 whitespace-delimited tokens in row-major
    /// order, each a digit 1-9 (given) or '.' (blank).
    puzzle: PathBuf,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum RunError {
    #[display("{_0}")]
    Input(input::ReadPuzzleError),
    #[display("{_0}")]
    Solve(SolveError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let grid = input::read_puzzle(&args.puzzle)?;
    log::info!("loaded puzzle with {} givens", grid.filled_count());

    let mut solver = Solver::with_tracer(grid, LogTracer);
    match solver.solve() {
        Ok(solution) => {
            println!("{solution}");
            Ok(())
        }
        Err(err) => {
            // Render the best-effort state before reporting the verdict
            println!("{}", solver.grid());
            Err(err.into())
        }
    }
}
