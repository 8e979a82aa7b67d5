//! Simulation state machine: drives transitions until a stop condition holds.
//!
//! The loop keeps the two most recent generations (`present` and `past`) and
//! inspects the not-yet-committed `future` before accepting it. Checks run in
//! a fixed order:
//!
//! 1. `present` has no alive cells: [`StopReason::Extinct`].
//! 2. `future == present`: [`StopReason::Stagnant`].
//! 3. `future == past`: [`StopReason::Oscillating`], or [`StopReason::Extinct`]
//!    when both are all-dead. That only happens against the all-dead initial
//!    `past`, i.e. a pattern that dies in its first transition.
//! 4. Otherwise `future` is committed and the generation counter increments;
//!    reaching the budget stops with [`StopReason::BudgetReached`].
//!
//! A stopped simulation never resumes.

use std::fmt;
use std::mem;

use serde::Serialize;

use crate::core::grid::Grid;
use crate::core::transition::next_generation;

/// Why the simulation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// No alive cells remain (or the next generation would have none).
    Extinct,
    /// The next generation equals the present one (period-1 fixed point).
    Stagnant,
    /// The next generation equals the one before the present (period-2 cycle).
    Oscillating,
    /// The generation counter reached the requested budget.
    BudgetReached,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StopReason::Extinct => "no alive cells",
            StopReason::Stagnant => "generation unchanged (still life)",
            StopReason::Oscillating => "generation repeats every two steps (period-2 oscillation)",
            StopReason::BudgetReached => "generation budget reached",
        };
        f.write_str(text)
    }
}

/// Lifecycle of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    Stopped(StopReason),
}

/// Result of a single [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A new generation was committed; `generation` is the updated counter.
    Advanced { generation: u32 },
    /// The simulation is (or already was) stopped.
    Stopped(StopReason),
}

/// Final report of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub reason: StopReason,
    /// Generations committed before the loop stopped.
    pub generations: u32,
    /// Last committed generation.
    pub final_grid: Grid,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    past: Grid,
    present: Grid,
    generation: u32,
    budget: u32,
    state: SimulationState,
}

impl Simulation {
    /// Start from `initial` with an all-dead `past`. A zero budget stops immediately.
    pub fn new(initial: Grid, budget: u32) -> Self {
        let state = if budget == 0 {
            SimulationState::Stopped(StopReason::BudgetReached)
        } else {
            SimulationState::Running
        };
        Self {
            past: Grid::dead_like(&initial),
            present: initial,
            generation: 0,
            budget,
            state,
        }
    }

    pub fn present(&self) -> &Grid {
        &self.present
    }

    pub fn past(&self) -> &Grid {
        &self.past
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Evaluate one transition and either commit it or stop.
    pub fn step(&mut self) -> Step {
        if let SimulationState::Stopped(reason) = self.state {
            return Step::Stopped(reason);
        }
        if self.present.is_extinct() {
            return self.stop(StopReason::Extinct);
        }

        let future = next_generation(&self.present);
        if future == self.present {
            return self.stop(StopReason::Stagnant);
        }
        if future == self.past {
            let reason = if future.is_extinct() {
                StopReason::Extinct
            } else {
                StopReason::Oscillating
            };
            return self.stop(reason);
        }

        self.past = mem::replace(&mut self.present, future);
        self.generation += 1;
        if self.generation >= self.budget {
            self.state = SimulationState::Stopped(StopReason::BudgetReached);
        }
        Step::Advanced {
            generation: self.generation,
        }
    }

    /// Step until stopped, calling `on_generation` after every committed generation.
    pub fn run<F: FnMut(&Grid, u32)>(mut self, mut on_generation: F) -> Outcome {
        loop {
            match self.step() {
                Step::Advanced { generation } => on_generation(&self.present, generation),
                Step::Stopped(reason) => {
                    return Outcome {
                        reason,
                        generations: self.generation,
                        final_grid: self.present,
                    };
                }
            }
        }
    }

    fn stop(&mut self, reason: StopReason) -> Step {
        self.state = SimulationState::Stopped(reason);
        Step::Stopped(reason)
    }
}
