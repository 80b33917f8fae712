use snapdoku_core::Grid;

use crate::{NullTracer, Snapshot, SolveError, Tracer, search};

/// The solving engine facade.
///
/// A `Solver` owns the root [`Snapshot`] built from the input grid and the
/// committed output grid. [`solve`](Self::solve) drives the engine to one of
/// three terminal outcomes: a solved grid, a proven contradiction, or an
/// exhausted search.
///
/// # Examples
///
/// ```
/// use snapdoku_core::Grid;
/// use snapdoku_solver::Solver;
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
/// let mut solver = Solver::new(grid);
/// let solution = solver.solve()?;
/// assert!(solution.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Solver {
    /// The last committed grid: the input until a solution is committed.
    committed: Grid,
    root: Snapshot,
    tracer: Box<dyn Tracer>,
}

impl Solver {
    /// Creates a solver for the given grid with no tracing.
    ///
    /// Root snapshot construction, including the initial propagation pass,
    /// happens here; a contradiction among the givens is reported by the
    /// first [`solve`](Self::solve) call.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::with_tracer(grid, NullTracer)
    }

    /// Creates a solver that reports engine events to `tracer`.
    #[must_use]
    pub fn with_tracer<T>(grid: Grid, tracer: T) -> Self
    where
        T: Tracer + 'static,
    {
        let mut tracer: Box<dyn Tracer> = Box::new(tracer);
        let root = Snapshot::from_givens(&grid, tracer.as_mut());
        Self {
            committed: grid,
            root,
            tracer,
        }
    }

    /// Runs the engine to completion.
    ///
    /// If the root snapshot is already solved the result is committed
    /// immediately; otherwise the backtracking search runs. On success the
    /// solved grid is committed and returned.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Unsolvable`] when the constraints are contradictory
    ///   (colliding givens, or propagation from the givens emptied a cell).
    /// - [`SolveError::Exhausted`] when every candidate assignment was tried
    ///   without finding a solution.
    pub fn solve(&mut self) -> Result<&Grid, SolveError> {
        if !self.root.is_valid() {
            return Err(SolveError::Unsolvable);
        }
        if self.root.is_solved() {
            self.commit();
            return Ok(&self.committed);
        }
        let found = search::search(&mut self.root, self.tracer.as_mut());
        if !self.root.is_valid() {
            return Err(SolveError::Unsolvable);
        }
        if found && self.root.is_solved() {
            self.commit();
            return Ok(&self.committed);
        }
        Err(SolveError::Exhausted)
    }

    /// Returns the committed grid: the solution after a successful
    /// [`solve`](Self::solve), otherwise the input grid (best effort).
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.committed
    }

    /// Returns the root snapshot.
    #[must_use]
    pub const fn root(&self) -> &Snapshot {
        &self.root
    }

    fn commit(&mut self) {
        self.committed = self.root.grid().clone();
    }
}
