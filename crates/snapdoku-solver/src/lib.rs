//! Snapshot-based sudoku solving engine.
//!
//! The engine represents puzzle state as bitmask constraints and explores it
//! with constraint propagation plus backtracking search:
//!
//! - [`Snapshot`] is one immutable, self-consistent copy of the full puzzle
//!   state (cell values, per-house used-digit masks, per-cell candidate
//!   masks) at a node of the search tree. Branching copies a parent snapshot
//!   and applies exactly one assignment; parents and children never share
//!   storage.
//! - Constraint propagation lives inside snapshot construction: every
//!   assignment triggers a full candidate recompute, and cells left with a
//!   single candidate ("naked singles") are filled in a fixpoint loop, so
//!   forced moves never consume search branches.
//! - [`search`] implements the backtracking controller: branch on the cell
//!   with the minimum remaining candidates, fork one child per candidate
//!   digit, recurse into valid children, commit the first solved descendant.
//! - [`Solver`] is the facade: it owns the root snapshot and reports exactly
//!   one of solved grid, [`SolveError::Unsolvable`], or
//!   [`SolveError::Exhausted`].
//!
//! Solving is single-threaded and deterministic: scans are row-major and
//! candidates are tried in ascending digit order.
//!
//! # Examples
//!
//! ```
//! use snapdoku_core::Grid;
//! use snapdoku_solver::Solver;
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let mut solver = Solver::new(grid);
//! let solution = solver.solve()?;
//! println!("{solution}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, snapshot::*, solver::*, trace::*};

mod error;
pub mod search;
mod snapshot;
mod solver;
mod trace;

#[cfg(test)]
mod testing;
