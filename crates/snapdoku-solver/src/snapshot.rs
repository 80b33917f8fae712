use snapdoku_core::{Cell, Digit, DigitSet, Grid};
use tinyvec::ArrayVec;

use crate::{Contradiction, Tracer};

/// One self-consistent (or provably contradictory) copy of the full puzzle
/// state at a node of the search tree.
///
/// A snapshot owns every piece of derived constraint state: the 81 cell
/// values, the per-row/column/box "used digit" masks, the per-cell candidate
/// masks with their cached popcounts, and the digit-presence tables. It is
/// conceptually immutable once constructed: descendants are produced by
/// [`fork`](Self::fork), which copies the whole state and applies exactly one
/// additional assignment plus whatever forced propagation follows. A child
/// never aliases its parent's storage.
///
/// Two flags summarize the state: [`is_solved`](Self::is_solved) (every cell
/// filled) and [`is_valid`](Self::is_valid) (no contradiction encountered).
/// Once `is_valid` returns `false` it stays `false`; an invalid snapshot must
/// not be explored further.
///
/// # Examples
///
/// ```
/// use snapdoku_core::{Cell, Grid};
/// use snapdoku_solver::{NullTracer, Snapshot};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let mut tracer = NullTracer;
/// let snapshot = Snapshot::from_givens(&grid, &mut tracer);
/// assert!(snapshot.is_valid());
/// # Ok::<(), snapdoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    solved: bool,
    valid: bool,
    /// Cell values, the authoritative puzzle state.
    grid: Grid,
    /// `rows[r]` holds the digits already placed in row `r`.
    rows: [DigitSet; Cell::HOUSES],
    /// `cols[c]` holds the digits already placed in column `c`.
    cols: [DigitSet; Cell::HOUSES],
    /// `boxes[b]` holds the digits already placed in box `b`.
    boxes: [DigitSet; Cell::HOUSES],
    /// Per-cell candidate masks; empty for filled cells.
    candidates: [DigitSet; Cell::COUNT],
    /// Cached popcounts of `candidates`, for O(1) single/contradiction checks.
    candidate_counts: [u8; Cell::COUNT],
    /// `row_presence[d][r]` is true when digit `d + 1` is placed in row `r`.
    /// Redundant with `rows`; kept for O(1) point queries.
    row_presence: [[bool; Cell::HOUSES]; Cell::HOUSES],
    /// As `row_presence`, for columns.
    col_presence: [[bool; Cell::HOUSES]; Cell::HOUSES],
    /// As `row_presence`, for boxes.
    box_presence: [[bool; Cell::HOUSES]; Cell::HOUSES],
}

impl Snapshot {
    /// Builds the root snapshot from an initial grid of givens and blanks.
    ///
    /// Scans all 81 cells in row-major order, registering each given in its
    /// row, column, and box. A given that collides with an earlier one marks
    /// the snapshot invalid and construction stops early, since the clues
    /// themselves are contradictory. A fully filled grid is marked solved
    /// with no further work. Otherwise the initial candidate pass runs,
    /// followed by the single-possibility propagation loop; a contradiction
    /// found by either marks the snapshot invalid.
    ///
    /// The caller must check [`is_valid`](Self::is_valid) before using the
    /// result.
    #[must_use]
    pub fn from_givens(grid: &Grid, tracer: &mut dyn Tracer) -> Self {
        let mut snapshot = Self {
            solved: true,
            valid: true,
            grid: grid.clone(),
            rows: [DigitSet::EMPTY; Cell::HOUSES],
            cols: [DigitSet::EMPTY; Cell::HOUSES],
            boxes: [DigitSet::EMPTY; Cell::HOUSES],
            candidates: [DigitSet::EMPTY; Cell::COUNT],
            candidate_counts: [0; Cell::COUNT],
            row_presence: [[false; Cell::HOUSES]; Cell::HOUSES],
            col_presence: [[false; Cell::HOUSES]; Cell::HOUSES],
            box_presence: [[false; Cell::HOUSES]; Cell::HOUSES],
        };

        for (cell, value) in grid.iter() {
            let Some(digit) = value else {
                snapshot.solved = false;
                continue;
            };
            if !snapshot.digit_free_at(cell, digit) {
                snapshot.invalidate(cell, tracer);
                return snapshot;
            }
            snapshot.mark_used(cell, digit);
        }
        if snapshot.solved {
            return snapshot;
        }

        let mut result = snapshot.recompute_candidates();
        if result.is_ok() {
            result = snapshot.propagate_singles(tracer);
        }
        if let Err(contradiction) = result {
            snapshot.invalidate(contradiction.cell, tracer);
        }
        snapshot
    }

    /// Builds a child snapshot from this one plus a single assignment.
    ///
    /// The parent's full state is copied into independent storage, `digit`
    /// is assigned to `cell`, and the single-possibility propagation loop
    /// runs. If the assignment or the propagation raises a contradiction the
    /// child comes back invalid; the caller must check
    /// [`is_valid`](Self::is_valid) before any further use.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is already filled. That is a programming-invariant
    /// violation, not a normal error path: the search only branches on
    /// unfilled cells.
    #[must_use]
    pub fn fork(&self, cell: Cell, digit: Digit, tracer: &mut dyn Tracer) -> Self {
        debug_assert!(self.valid, "forking an invalid snapshot");
        let mut child = self.clone();
        let mut result = child.set_cell(cell, digit, tracer);
        if result.is_ok() && !child.solved {
            result = child.propagate_singles(tracer);
        }
        if let Err(contradiction) = result {
            child.invalidate(contradiction.cell, tracer);
        }
        child
    }

    /// Returns `true` if no contradiction has been encountered.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns the current cell values.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the candidate set for a cell (empty for filled cells).
    #[must_use]
    pub const fn candidates_at(&self, cell: Cell) -> DigitSet {
        self.candidates[cell.index()]
    }

    /// Returns the cached candidate count for a cell (0 for filled cells).
    #[must_use]
    pub const fn candidate_count_at(&self, cell: Cell) -> usize {
        self.candidate_counts[cell.index()] as usize
    }

    /// Returns the digits already placed in a row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-8.
    #[must_use]
    pub fn row_used(&self, row: usize) -> DigitSet {
        self.rows[row]
    }

    /// Returns the digits already placed in a column.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in the range 0-8.
    #[must_use]
    pub fn col_used(&self, col: usize) -> DigitSet {
        self.cols[col]
    }

    /// Returns the digits already placed in a box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    #[must_use]
    pub fn box_used(&self, box_index: usize) -> DigitSet {
        self.boxes[box_index]
    }

    /// Point query on the presence tables: is `digit` placed in `row`?
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-8.
    #[must_use]
    pub fn digit_in_row(&self, digit: Digit, row: usize) -> bool {
        self.row_presence[digit.value() as usize - 1][row]
    }

    /// Point query on the presence tables: is `digit` placed in `col`?
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in the range 0-8.
    #[must_use]
    pub fn digit_in_col(&self, digit: Digit, col: usize) -> bool {
        self.col_presence[digit.value() as usize - 1][col]
    }

    /// Point query on the presence tables: is `digit` placed in `box_index`?
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    #[must_use]
    pub fn digit_in_box(&self, digit: Digit, box_index: usize) -> bool {
        self.box_presence[digit.value() as usize - 1][box_index]
    }

    /// True when `digit` is absent from the cell's row, column, and box.
    fn digit_free_at(&self, cell: Cell, digit: Digit) -> bool {
        !self.digit_in_row(digit, cell.row())
            && !self.digit_in_col(digit, cell.col())
            && !self.digit_in_box(digit, cell.box_index())
    }

    /// Registers a placed digit in the house masks and presence tables.
    fn mark_used(&mut self, cell: Cell, digit: Digit) {
        let d = digit.value() as usize - 1;
        self.rows[cell.row()].insert(digit);
        self.cols[cell.col()].insert(digit);
        self.boxes[cell.box_index()].insert(digit);
        self.row_presence[d][cell.row()] = true;
        self.col_presence[d][cell.col()] = true;
        self.box_presence[d][cell.box_index()] = true;
    }

    /// Records a contradiction. Permanent: validity is never restored, and
    /// an invalid snapshot is never reported solved.
    fn invalidate(&mut self, cell: Cell, tracer: &mut dyn Tracer) {
        self.valid = false;
        self.solved = false;
        tracer.contradiction_found(cell);
    }

    /// Recomputes the candidate mask and count of every unfilled cell from
    /// the house masks.
    ///
    /// A cell left with zero candidates is a contradiction. If no unfilled
    /// cell exists at all, the snapshot is marked solved.
    fn recompute_candidates(&mut self) -> Result<(), Contradiction> {
        let mut any_unfilled = false;
        for cell in Cell::all() {
            if self.grid.get(cell).is_some() {
                continue;
            }
            any_unfilled = true;
            let used = self.rows[cell.row()] | self.cols[cell.col()] | self.boxes[cell.box_index()];
            let candidates = DigitSet::FULL.difference(used);
            if candidates.is_empty() {
                return Err(Contradiction { cell });
            }
            #[expect(clippy::cast_possible_truncation)]
            let count = candidates.len() as u8;
            self.candidates[cell.index()] = candidates;
            self.candidate_counts[cell.index()] = count;
        }
        if !any_unfilled {
            self.solved = true;
        }
        Ok(())
    }

    /// Assigns a digit to an unfilled cell and recomputes all candidates.
    ///
    /// The full-grid recompute is deliberate: one assignment can affect
    /// arbitrarily many cells' candidate sets, and a full rescan is the
    /// simplest invariant-preserving approach.
    fn set_cell(
        &mut self,
        cell: Cell,
        digit: Digit,
        tracer: &mut dyn Tracer,
    ) -> Result<(), Contradiction> {
        if let Some(existing) = self.grid.get(cell) {
            panic!("cell {cell} already contains {existing}, cannot assign {digit}");
        }
        self.grid.set(cell, Some(digit));
        self.mark_used(cell, digit);
        self.candidates[cell.index()] = DigitSet::EMPTY;
        self.candidate_counts[cell.index()] = 0;
        tracer.cell_assigned(cell, digit);
        self.recompute_candidates()
    }

    /// Repeatedly fills naked singles until none remain.
    ///
    /// Each pass scans all 81 cells in row-major order and queues every cell
    /// whose candidate count is exactly one (a queued cell is never queued
    /// twice). One queued cell is then assigned, which can create new singles
    /// elsewhere, so the scan restarts from scratch after every assignment.
    /// The loop ends when a scan finds nothing new and the queue is drained,
    /// or earlier when an assignment raises a contradiction.
    fn propagate_singles(&mut self, tracer: &mut dyn Tracer) -> Result<(), Contradiction> {
        let mut queue: ArrayVec<[Cell; Cell::COUNT]> = ArrayVec::new();
        let mut queued = [false; Cell::COUNT];
        let mut next = 0;
        loop {
            for cell in Cell::all() {
                if self.candidate_counts[cell.index()] == 1 && !queued[cell.index()] {
                    queued[cell.index()] = true;
                    queue.push(cell);
                }
            }
            if next == queue.len() {
                break;
            }
            let cell = queue[next];
            next += 1;
            let digit = self
                .candidates_at(cell)
                .as_single()
                .expect("queued cell must have exactly one candidate");
            self.set_cell(cell, digit, tracer)?;
        }
        Ok(())
    }
}
