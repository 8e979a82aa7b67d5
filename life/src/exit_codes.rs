//! Stable exit codes for the `life` command.

/// The simulation ran to a normal stop.
pub const OK: i32 = 0;
/// Invalid arguments, configuration, or unreadable input.
pub const INVALID: i32 = 1;
/// The pattern had no alive cells, so no generation could run.
pub const NO_LIFE: i32 = 2;
