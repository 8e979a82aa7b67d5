//! Deterministic, pure logic for the simulation.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! grids and return deterministic outputs suitable for tests.

pub mod error;
pub mod grid;
pub mod pattern;
pub mod simulation;
pub mod transition;
