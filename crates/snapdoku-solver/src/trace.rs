use std::fmt::Debug;

use snapdoku_core::{Cell, Digit};

/// An observer for solver events.
///
/// The engine invokes a tracer at three well-defined points: when a digit is
/// assigned to a cell (whether by the given scan, forced propagation, or a
/// branch), when a contradiction is detected, and when the search picks a
/// branch candidate. All callbacks default to no-ops, so implementations only
/// override the events they care about.
///
/// # Examples
///
/// ```
/// use snapdoku_core::{Cell, Digit};
/// use snapdoku_solver::Tracer;
///
/// #[derive(Debug, Default)]
/// struct AssignmentCounter(usize);
///
/// impl Tracer for AssignmentCounter {
///     fn cell_assigned(&mut self, _cell: Cell, _digit: Digit) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait Tracer: Debug + Send + Sync {
    /// Called after a digit has been assigned to a cell.
    fn cell_assigned(&mut self, cell: Cell, digit: Digit) {
        let _ = (cell, digit);
    }

    /// Called when a cell is found with no remaining candidates.
    fn contradiction_found(&mut self, cell: Cell) {
        let _ = cell;
    }

    /// Called when the search forks a branch, before the assignment happens.
    fn branch_taken(&mut self, cell: Cell, digit: Digit) {
        let _ = (cell, digit);
    }
}

/// The silent default tracer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTracer;

impl Tracer for NullTracer {}

/// A tracer that forwards events to the [`log`] facade.
///
/// Assignments are logged at trace level (they are frequent); contradictions
/// and branches at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn cell_assigned(&mut self, cell: Cell, digit: Digit) {
        log::trace!("assigned {digit} to cell {cell}");
    }

    fn contradiction_found(&mut self, cell: Cell) {
        log::debug!("contradiction: cell {cell} has no remaining candidates");
    }

    fn branch_taken(&mut self, cell: Cell, digit: Digit) {
        log::debug!("branching on cell {cell} with {digit}");
    }
}
