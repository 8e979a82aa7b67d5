//! Conway's Game of Life on a fixed, bounded grid.
//!
//! A text pattern is centered in a grid of the requested size and evolved
//! until it dies out, settles, starts a period-2 cycle, or runs out of
//! generations. The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (grid, pattern placement, the
//!   transition rule, the simulation state machine). No I/O.
//! - **[`io`]**: Side-effecting adapters (config, pattern files, rendering,
//!   interactive pause).
//!
//! [`run`] couples the two to implement the `life` command.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
