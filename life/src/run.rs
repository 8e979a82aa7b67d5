//! Orchestration for a single `life` run.
//!
//! Loads the pattern, drives the [`Simulation`] to completion and renders the
//! generations the caller asked for. Rendering and pausing go through the
//! writer and [`Pauser`] passed in, so tests can capture both.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::pattern::PatternTooLarge;
use crate::core::simulation::{Simulation, Step, StopReason};
use crate::io::config::LifeConfig;
use crate::io::pattern_file::load_pattern_file;
use crate::io::pause::Pauser;
use crate::io::render::write_grid;

/// Parameters for one run, as given on the command line.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub rows: usize,
    pub columns: usize,
    /// Generation budget; `0` reports only the initial pattern.
    pub generations: u32,
    pub input: PathBuf,
    /// Render every committed generation instead of only the final one.
    pub print: bool,
    /// Wait for the user before each committed generation. Requires `print`.
    pub pause: bool,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub rows: usize,
    pub columns: usize,
    pub budget: u32,
    pub generations_processed: u32,
    pub stop: StopReason,
    pub final_population: usize,
    pub clipped: Option<PatternTooLarge>,
}

/// Run the simulation described by `request`, rendering into `out`.
///
/// The initial generation is always rendered. With `print`, every committed
/// generation follows it; without, only the final generation is rendered
/// after the loop stops.
pub fn run_life<W: Write, P: Pauser>(
    request: &RunRequest,
    config: &LifeConfig,
    out: &mut W,
    pauser: &P,
) -> Result<RunReport> {
    if request.pause && !request.print {
        bail!("cannot pause with printing off");
    }

    let markers = config.markers();
    let placement =
        load_pattern_file(&request.input, &markers, request.rows, request.columns)?;
    if let Some(clipped) = &placement.warning {
        warn!(%clipped, "pattern clipped to grid");
    }
    debug!(
        rows = request.rows,
        columns = request.columns,
        population = placement.grid.population(),
        "initial generation placed"
    );

    write_grid(out, &placement.grid, &config.render)?;

    let mut simulation = Simulation::new(placement.grid, request.generations);
    let stop = loop {
        match simulation.step() {
            Step::Advanced { generation } => {
                debug!(
                    generation,
                    population = simulation.present().population(),
                    "generation committed"
                );
                if request.pause {
                    pauser.pause(request.generations - generation + 1)?;
                }
                if request.print {
                    write_grid(out, simulation.present(), &config.render)?;
                }
            }
            Step::Stopped(reason) => break reason,
        }
    };
    info!(reason = ?stop, generations = simulation.generation(), "simulation stopped");

    if stop != StopReason::BudgetReached {
        writeln!(out, "Stopped: {stop}.").context("write stop reason")?;
    }
    if !request.print {
        write_grid(out, simulation.present(), &config.render)?;
    }

    Ok(RunReport {
        rows: request.rows,
        columns: request.columns,
        budget: request.generations,
        generations_processed: simulation.generation(),
        stop,
        final_population: simulation.present().population(),
        clipped: placement.warning,
    })
}

/// Write the closing summary, either as text or as a JSON report.
pub fn write_summary<W: Write>(out: &mut W, report: &RunReport, json: bool) -> Result<()> {
    if json {
        let payload = serde_json::to_string_pretty(report).context("serialize run report")?;
        writeln!(out, "{payload}").context("write run report")?;
    } else {
        writeln!(
            out,
            "{} generations have been processed. Exiting...",
            report.generations_processed
        )
        .context("write summary")?;
    }
    Ok(())
}
