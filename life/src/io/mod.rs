//! I/O adapters for the `life` command.

pub mod config;
pub mod pattern_file;
pub mod pause;
pub mod render;
