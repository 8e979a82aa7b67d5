//! Text rendering of grids.

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::grid::Grid;
use crate::io::config::RenderConfig;

/// Render one line per grid row, each terminated by `\n`.
pub fn render_grid(grid: &Grid, glyphs: &RenderConfig) -> String {
    let mut buf = String::with_capacity(grid.rows() * (grid.columns() + 1));
    for row in grid.iter_rows() {
        buf.extend(row.iter().map(|state| {
            if state.is_alive() {
                glyphs.alive
            } else {
                glyphs.dead
            }
        }));
        buf.push('\n');
    }
    buf
}

pub fn write_grid<W: Write>(out: &mut W, grid: &Grid, glyphs: &RenderConfig) -> Result<()> {
    out.write_all(render_grid(grid, glyphs).as_bytes())
        .context("write grid")
}
