//! Backtracking search over candidate snapshots.
//!
//! Propagation alone solves easy puzzles; everything else ends in a snapshot
//! with residual ambiguity. This module explores that ambiguity: pick the
//! most constrained unfilled cell, fork one child snapshot per candidate
//! digit, and recurse into each valid child until one reaches a solved state.
//! The first solved descendant is committed back into the starting snapshot;
//! a failed branch is simply dropped.

use snapdoku_core::Cell;

use crate::{Snapshot, Tracer};

/// Picks the cell to branch on: minimum remaining candidates.
///
/// Among all unfilled cells with at least one candidate, returns the one with
/// the fewest candidates, ties broken by lowest flat index (the first such
/// cell in row-major order). Branching on the most constrained cell first
/// keeps the search tree narrow.
///
/// Returns `None` when no cell has any candidates, which happens on a solved
/// snapshot or after a contradiction has emptied the candidate state.
#[must_use]
pub fn select_branch_cell(snapshot: &Snapshot) -> Option<Cell> {
    let mut best: Option<(Cell, usize)> = None;
    for cell in Cell::all() {
        let count = snapshot.candidate_count_at(cell);
        if count == 0 {
            continue;
        }
        if best.is_none_or(|(_, best_count)| count < best_count) {
            best = Some((cell, count));
        }
    }
    best.map(|(cell, _)| cell)
}

/// Depth-first search for a solution from `snapshot`.
///
/// Selects a branch cell, then tries its candidate digits in ascending order.
/// Each try forks a child snapshot ([`Snapshot::fork`]), which re-runs forced
/// propagation after the assignment:
///
/// - an invalid child is discarded and the next candidate is tried;
/// - a solved child (or a valid child whose own subtree eventually solves) is
///   copied back into `snapshot` and the remaining candidates are skipped;
/// - when every candidate fails, the function reports failure and leaves
///   `snapshot` unchanged.
///
/// Returns `true` when `snapshot` now holds a solved state. Recursion depth
/// is bounded by the number of unfilled cells.
pub fn search(snapshot: &mut Snapshot, tracer: &mut dyn Tracer) -> bool {
    let Some(cell) = select_branch_cell(snapshot) else {
        return false;
    };
    for digit in snapshot.candidates_at(cell) {
        tracer.branch_taken(cell, digit);
        let mut child = snapshot.fork(cell, digit, tracer);
        if !child.is_valid() {
            continue;
        }
        if child.is_solved() || search(&mut child, tracer) {
            // Commit the winning branch
            *snapshot = child;
            return true;
        }
    }
    false
}
