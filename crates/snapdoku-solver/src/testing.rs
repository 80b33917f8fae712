//! Shared fixtures for engine tests.

use std::sync::{Arc, Mutex};

use snapdoku_core::{Cell, Digit, DigitSet, Grid};

use crate::Tracer;

/// The well-known easy puzzle used as a smoke test throughout the crate.
pub(crate) const CLASSIC_PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

/// The unique solution of [`CLASSIC_PUZZLE`].
pub(crate) const CLASSIC_SOLUTION: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

/// A minimal 17-clue puzzle. Forced propagation barely progresses on it, so
/// solving requires several levels of nested branching.
pub(crate) const SEVENTEEN_CLUE_PUZZLE: &str = "
    ___ ___ _1_
    4__ ___ ___
    _2_ ___ ___
    ___ _5_ 4_7
    __8 ___ 3__
    __1 _9_ ___
    3__ 4__ 2__
    _5_ 1__ ___
    ___ 8_6 ___
";

/// Parses a grid literal, panicking on malformed fixtures.
pub(crate) fn grid(text: &str) -> Grid {
    text.parse().unwrap()
}

/// Asserts that `grid` is a complete grid with each digit exactly once per
/// row, column, and box.
#[track_caller]
pub(crate) fn assert_valid_solution(grid: &Grid) {
    assert!(grid.is_complete(), "grid has unfilled cells:\n{grid}");
    let mut rows = [DigitSet::EMPTY; 9];
    let mut cols = [DigitSet::EMPTY; 9];
    let mut boxes = [DigitSet::EMPTY; 9];
    for (cell, value) in grid.iter() {
        let digit = value.unwrap();
        assert!(
            !rows[cell.row()].contains(digit),
            "{digit} repeats in row {}:\n{grid}",
            cell.row()
        );
        assert!(
            !cols[cell.col()].contains(digit),
            "{digit} repeats in column {}:\n{grid}",
            cell.col()
        );
        assert!(
            !boxes[cell.box_index()].contains(digit),
            "{digit} repeats in box {}:\n{grid}",
            cell.box_index()
        );
        rows[cell.row()].insert(digit);
        cols[cell.col()].insert(digit);
        boxes[cell.box_index()].insert(digit);
    }
    for house in 0..9 {
        assert!(rows[house].is_full());
        assert!(cols[house].is_full());
        assert!(boxes[house].is_full());
    }
}

/// An engine event observed by [`RecordingTracer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TraceEvent {
    /// A digit was assigned to a cell.
    Assigned { cell: Cell, digit: Digit },
    /// A cell was found with no remaining candidates.
    Contradiction { cell: Cell },
    /// The search forked a branch.
    Branched { cell: Cell, digit: Digit },
}

/// A tracer that records every event into a shared buffer.
///
/// Clones share the buffer, so a test can hand one clone to the solver and
/// inspect the events through another.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingTracer {
    events: Arc<Mutex<Vec<TraceEvent>>>,
}

impl RecordingTracer {
    /// Returns a copy of the events recorded so far.
    pub(crate) fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Tracer for RecordingTracer {
    fn cell_assigned(&mut self, cell: Cell, digit: Digit) {
        self.events
            .lock()
            .unwrap()
            .push(TraceEvent::Assigned { cell, digit });
    }

    fn contradiction_found(&mut self, cell: Cell) {
        self.events
            .lock()
            .unwrap()
            .push(TraceEvent::Contradiction { cell });
    }

    fn branch_taken(&mut self, cell: Cell, digit: Digit) {
        self.events
            .lock()
            .unwrap()
            .push(TraceEvent::Branched { cell, digit });
    }
}
