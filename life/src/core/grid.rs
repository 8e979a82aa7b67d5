//! Fixed-size rectangular grid of cell states.
//!
//! Cells live in one flat buffer indexed by `row * columns + column`. The
//! dimensions are fixed at construction; every transition allocates a new
//! grid rather than mutating the one it reads from.

use crate::core::error::CoreError;

/// Binary state of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

/// Moore neighborhood offsets as `(row, column)` deltas.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Allocate a `rows x columns` grid with every cell dead.
    ///
    /// Zero dimensions, a cell count that overflows `usize`, and a buffer the
    /// allocator refuses all yield [`CoreError::Allocation`].
    pub fn new(rows: usize, columns: usize) -> Result<Self, CoreError> {
        let allocation = CoreError::Allocation { rows, columns };
        if rows == 0 || columns == 0 {
            return Err(allocation);
        }
        let len = rows.checked_mul(columns).ok_or(allocation)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| allocation)?;
        cells.resize(len, CellState::Dead);
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// All-dead grid with the same dimensions as `other`.
    pub fn dead_like(other: &Grid) -> Self {
        Self {
            rows: other.rows,
            columns: other.columns,
            cells: vec![CellState::Dead; other.cells.len()],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Read one cell. Panics if the coordinate is outside the grid.
    pub fn get(&self, row: usize, column: usize) -> CellState {
        self.cells[self.index(row, column)]
    }

    /// Write one cell. Panics if the coordinate is outside the grid.
    pub fn set(&mut self, row: usize, column: usize, state: CellState) {
        let idx = self.index(row, column);
        self.cells[idx] = state;
    }

    /// Count alive cells among the up-to-8 Moore neighbors of `(row, column)`.
    ///
    /// Positions beyond the edges are treated as dead (no wraparound), so a
    /// corner has 3 candidate neighbors, an edge cell 5, and an interior cell 8.
    pub fn count_alive_neighbors(&self, row: usize, column: usize) -> u8 {
        // Validate the center even though it is not counted.
        self.index(row, column);
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr).filter(|&r| r < self.rows)?;
                let c = column.checked_add_signed(dc).filter(|&c| c < self.columns)?;
                Some(self.cells[r * self.columns + c])
            })
            .filter(|state| state.is_alive())
            .count() as u8
    }

    /// Number of alive cells in the whole grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|state| state.is_alive())
    }

    /// Iterate rows top to bottom, each as a slice of `columns` cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.columns)
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) is outside the {}x{} grid",
            row,
            column,
            self.rows,
            self.columns
        );
        row * self.columns + column
    }
}
