use snapdoku_core::Cell;

/// The final verdict when a puzzle cannot be solved.
///
/// Recoverable contradictions inside the search are handled internally by
/// discarding the offending branch; only the two terminal outcomes below are
/// surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The puzzle constraints are contradictory: either the givens collide,
    /// or forced propagation from the givens empties some cell's candidates.
    #[display("no solution possible")]
    Unsolvable,
    /// The search tried every candidate assignment without reaching a
    /// solution. A normal negative result, distinct from a contradiction.
    #[display("no solution found")]
    Exhausted,
}

/// A propagation failure: some unfilled cell has no remaining candidates.
///
/// This proves the current branch unsolvable. It is recovered locally (the
/// branch is discarded), never surfaced as a [`SolveError`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell {cell} has no remaining candidates")]
pub struct Contradiction {
    /// The cell left without candidates.
    pub cell: Cell,
}
