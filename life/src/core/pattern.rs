//! Pattern parsing and centered placement.
//!
//! A pattern is a sequence of text lines where any configured marker character
//! denotes an alive cell and every other character is positional filler. The
//! pattern is measured, then placed in the middle of a freshly allocated grid.

use std::fmt;

use serde::Serialize;

use crate::core::error::CoreError;
use crate::core::grid::{CellState, Grid};

/// Characters recognized as alive when no other marker set is configured.
///
/// Both map to [`CellState::Alive`]; the distinction is an input convenience only.
pub const DEFAULT_ALIVE_MARKERS: [char; 2] = ['x', 'o'];

/// Raw pattern rows, one [`CellState`] per source character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    lines: Vec<Vec<CellState>>,
}

/// Non-fatal warning: part of the pattern fell outside the target grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternTooLarge {
    pub pattern_rows: usize,
    pub pattern_columns: usize,
    pub rows: usize,
    pub columns: usize,
    /// Alive cells that could not be placed.
    pub dropped_cells: usize,
}

impl fmt::Display for PatternTooLarge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pattern ({}x{}) does not fit a {}x{} grid; {} alive cell(s) clipped",
            self.pattern_rows, self.pattern_columns, self.rows, self.columns, self.dropped_cells
        )
    }
}

/// Initial generation produced by [`Pattern::center`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub grid: Grid,
    pub warning: Option<PatternTooLarge>,
}

impl Pattern {
    /// Parse text lines, treating every character in `markers` as alive.
    pub fn parse<S: AsRef<str>>(lines: &[S], markers: &[char]) -> Self {
        let lines = lines
            .iter()
            .map(|line| {
                line.as_ref()
                    .chars()
                    .map(|ch| {
                        if markers.contains(&ch) {
                            CellState::Alive
                        } else {
                            CellState::Dead
                        }
                    })
                    .collect()
            })
            .collect();
        Self { lines }
    }

    /// Number of lines holding at least one alive cell.
    pub fn alive_rows(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.iter().any(|state| state.is_alive()))
            .count()
    }

    /// Largest number of alive cells found on a single line.
    pub fn alive_columns(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.iter().filter(|state| state.is_alive()).count())
            .max()
            .unwrap_or(0)
    }

    /// Place the pattern in the middle of a new `rows x columns` grid.
    ///
    /// The offsets are `(rows - alive_rows) / 2` and `(columns - alive_columns) / 2`
    /// with truncating division. Line `i` lands on grid row `start_row + i` and
    /// each character keeps its column offset shifted by `start_col`. Cells that
    /// would land outside the grid are dropped and reported as a warning.
    pub fn center(self, rows: usize, columns: usize) -> Result<Placement, CoreError> {
        let mut grid = Grid::new(rows, columns)?;
        let pattern_rows = self.alive_rows();
        if pattern_rows == 0 {
            return Err(CoreError::EmptyPattern);
        }
        let pattern_columns = self.alive_columns();

        let start_row = centered_offset(rows, pattern_rows);
        let start_col = centered_offset(columns, pattern_columns);

        let mut dropped_cells = 0usize;
        for (i, line) in self.lines.iter().enumerate() {
            for (j, state) in line.iter().enumerate() {
                if !state.is_alive() {
                    continue;
                }
                match (shift(start_row, i, rows), shift(start_col, j, columns)) {
                    (Some(r), Some(c)) => grid.set(r, c, CellState::Alive),
                    _ => dropped_cells += 1,
                }
            }
        }

        let warning = (dropped_cells > 0).then_some(PatternTooLarge {
            pattern_rows,
            pattern_columns,
            rows,
            columns,
            dropped_cells,
        });
        Ok(Placement { grid, warning })
    }
}

/// Parse `lines` and center them in a `rows x columns` grid.
pub fn load_centered<S: AsRef<str>>(
    lines: &[S],
    markers: &[char],
    rows: usize,
    columns: usize,
) -> Result<Placement, CoreError> {
    Pattern::parse(lines, markers).center(rows, columns)
}

/// Truncating `(extent - size) / 2`; negative when the pattern is larger.
fn centered_offset(extent: usize, size: usize) -> isize {
    (extent as isize - size as isize) / 2
}

/// `start + index` if it lands within `[0, limit)`.
fn shift(start: isize, index: usize, limit: usize) -> Option<usize> {
    index
        .checked_add_signed(start)
        .filter(|&position| position < limit)
}
