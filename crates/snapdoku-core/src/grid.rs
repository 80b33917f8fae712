//! The 9×9 puzzle grid of givens and blanks.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::Cell, digit::Digit};

/// A 9×9 grid of cell values.
///
/// Each cell holds `Some(digit)` for a given or solved value, or `None` for a
/// blank. The grid is a plain value with no constraint knowledge; consistency
/// checking belongs to the solver.
///
/// # Examples
///
/// ```
/// use snapdoku_core::{Cell, Digit, Grid};
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
/// assert_eq!(grid.get(Cell::from_coords(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Cell::from_coords(0, 2)), None);
/// # Ok::<(), snapdoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; Cell::COUNT],
}

/// An error produced when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contained a character that is neither a digit nor a blank
    /// marker.
    #[display("unexpected character {ch:?} in grid")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
    },
    /// The text did not contain exactly 81 cell values.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cell values found.
        count: usize,
    },
}

impl Grid {
    /// Creates an empty grid (all cells blank).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; Cell::COUNT],
        }
    }

    /// Creates a grid from a flat row-major array of cell values.
    #[must_use]
    pub const fn from_cells(cells: [Option<Digit>; Cell::COUNT]) -> Self {
        Self { cells }
    }

    /// Returns the value of a cell.
    #[must_use]
    pub const fn get(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index()]
    }

    /// Sets the value of a cell.
    pub const fn set(&mut self, cell: Cell, value: Option<Digit>) {
        self.cells[cell.index()] = value;
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|value| value.is_some()).count()
    }

    /// Returns an iterator over `(cell, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<Digit>)> {
        Cell::all().map(|cell| (cell, self.get(cell)))
    }

    /// Returns the flat row-major cell array.
    #[must_use]
    pub const fn cells(&self) -> &[Option<Digit>; Cell::COUNT] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid literal.
    ///
    /// Digits 1-9 are givens; `.`, `_`, and `0` are blanks; whitespace is
    /// ignored. Exactly 81 cell values are required.
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut cells = [None; Cell::COUNT];
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let value = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch as u8 - b'0';
                    Some(Digit::from_value(value))
                }
                _ => return Err(ParseGridError::UnexpectedCharacter { ch }),
            };
            if count < Cell::COUNT {
                cells[count] = value;
            }
            count += 1;
        }
        if count != Cell::COUNT {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

impl Display for Grid {
    /// Renders the grid row by row, cells space-separated, `.` for blanks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Cell::HOUSES {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..Cell::HOUSES {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Cell::from_coords(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_blank_markers() {
        let grid: Grid = "
            ._0 ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ..9 ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ..1
        "
        .parse()
        .unwrap();

        assert_eq!(grid.filled_count(), 2);
        assert_eq!(grid.get(Cell::from_coords(4, 5)), Some(Digit::D9));
        assert_eq!(grid.get(Cell::from_coords(8, 8)), Some(Digit::D1));
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let err = "x".repeat(81).parse::<Grid>().unwrap_err();
        assert_eq!(err, ParseGridError::UnexpectedCharacter { ch: 'x' });
    }

    #[test]
    fn test_parse_rejects_wrong_count() {
        let err = ".".repeat(80).parse::<Grid>().unwrap_err();
        assert_eq!(err, ParseGridError::WrongCellCount { count: 80 });

        let err = ".".repeat(82).parse::<Grid>().unwrap_err();
        assert_eq!(err, ParseGridError::WrongCellCount { count: 82 });
    }

    #[test]
    fn test_display_format() {
        let mut grid = Grid::new();
        grid.set(Cell::from_coords(0, 0), Some(Digit::D5));
        grid.set(Cell::from_coords(0, 8), Some(Digit::D3));

        let rendered = grid.to_string();
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "5 . . . . . . . 3");
        assert_eq!(rendered.lines().count(), 9);
    }

    #[test]
    fn test_is_complete() {
        assert!(!Grid::new().is_complete());

        let cells = [Some(Digit::D1); Cell::COUNT];
        assert!(Grid::from_cells(cells).is_complete());
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        proptest::collection::vec(proptest::option::of(1u8..=9), Cell::COUNT).prop_map(|values| {
            let mut cells = [None; Cell::COUNT];
            for (slot, value) in cells.iter_mut().zip(values) {
                *slot = value.map(Digit::from_value);
            }
            Grid::from_cells(cells)
        })
    }

    proptest! {
        #[test]
        fn prop_display_parse_roundtrip(grid in arb_grid()) {
            let rendered = grid.to_string();
            let reparsed: Grid = rendered.parse().unwrap();
            prop_assert_eq!(reparsed, grid);
        }
    }
}
