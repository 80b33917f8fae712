//! Core data structures for the snapdoku solver.
//!
//! This crate provides the puzzle-domain value types shared by the solving
//! engine and the command-line front end:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9, including the
//!   digit-to-bitmask mapping ([`Digit::bit`]).
//! - [`digit_set`]: [`DigitSet`], a 9-bit set over digits used for candidate
//!   masks and per-house "used digit" masks.
//! - [`cell`]: [`Cell`], a validated flat index 0-80 with row/column/box
//!   accessors and a guaranteed row-major ordering.
//! - [`grid`]: [`Grid`], the 81-cell array of givens and blanks with text
//!   parsing and rendering.
//!
//! None of these types know anything about solving; constraint state lives in
//! the `snapdoku-solver` crate.
//!
//! # Examples
//!
//! ```
//! use snapdoku_core::{Cell, Digit, DigitSet, Grid};
//!
//! let mut used = DigitSet::new();
//! used.insert(Digit::D4);
//! used.insert(Digit::D7);
//!
//! // Candidates are the digits not yet used
//! let candidates = DigitSet::FULL.difference(used);
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::D4));
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
};
