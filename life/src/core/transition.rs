//! Generation transition rule (B3/S23 on a bounded grid).

use crate::core::grid::{CellState, Grid};

/// Next state of a single cell given its current state and alive-neighbor count.
pub fn next_state(current: CellState, alive_neighbors: u8) -> CellState {
    match (current, alive_neighbors) {
        (CellState::Alive, 2) | (CellState::Alive, 3) | (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Compute the next generation of `current` into a new grid of the same size.
pub fn next_generation(current: &Grid) -> Grid {
    let mut next = Grid::dead_like(current);
    for row in 0..current.rows() {
        for column in 0..current.columns() {
            let neighbors = current.count_alive_neighbors(row, column);
            let state = next_state(current.get(row, column), neighbors);
            if state.is_alive() {
                next.set(row, column, state);
            }
        }
    }
    next
}
