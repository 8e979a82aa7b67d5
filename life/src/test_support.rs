//! Test-only helpers for building grids and scripting I/O seams.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use crate::core::grid::{CellState, Grid};
use crate::io::pause::Pauser;

/// Build a grid from equal-length rows where `x` is alive and anything else is dead.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let columns = rows.first().map_or(0, |row| row.chars().count());
    let mut grid = Grid::new(rows.len(), columns).expect("non-empty grid");
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), columns, "ragged test grid row {r}");
        for (c, ch) in row.chars().enumerate() {
            if ch == 'x' {
                grid.set(r, c, CellState::Alive);
            }
        }
    }
    grid
}

/// Coordinates of alive cells in row-major order.
pub fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (r, row) in grid.iter_rows().enumerate() {
        for (c, state) in row.iter().enumerate() {
            if state.is_alive() {
                cells.push((r, c));
            }
        }
    }
    cells
}

/// Scratch directory holding a pattern file.
pub struct PatternFile {
    _dir: TempDir,
    path: PathBuf,
}

impl PatternFile {
    pub fn new(contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("pattern.txt");
        fs::write(&path, contents)?;
        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

/// Pauser that records the `remaining` value of every call instead of blocking.
#[derive(Default)]
pub struct ScriptedPauser {
    calls: RefCell<Vec<u32>>,
}

impl ScriptedPauser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<u32> {
        self.calls.borrow().clone()
    }
}

impl Pauser for ScriptedPauser {
    fn pause(&self, remaining: u32) -> Result<()> {
        self.calls.borrow_mut().push(remaining);
        Ok(())
    }
}
