//! Conway's Game of Life on a bounded grid.
//!
//! Reads a pattern file, centers it in a `rows x columns` grid and evolves it
//! for up to the requested number of generations, printing generations to
//! stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use life::core::error::CoreError;
use life::exit_codes;
use life::io::config::{LifeConfig, load_config};
use life::io::pause::StdinPauser;
use life::logging;
use life::run::{RunRequest, run_life, write_summary};

#[derive(Parser)]
#[command(
    name = "life",
    version,
    about = "Conway's Game of Life on a bounded grid"
)]
struct Cli {
    /// Number of grid rows.
    rows: usize,
    /// Number of grid columns.
    columns: usize,
    /// Maximum generations to run (0 shows only the initial pattern).
    generations: u32,
    /// Pattern file; `x` and `o` mark alive cells.
    input: PathBuf,
    /// `y` to print every generation instead of only the first and last.
    #[arg(value_parser = parse_yes)]
    print: Option<bool>,
    /// `y` to wait for Enter before each generation (requires print).
    #[arg(value_parser = parse_yes)]
    pause: Option<bool>,
    /// TOML file overriding alive markers and render glyphs.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the closing summary as a JSON report.
    #[arg(long)]
    json: bool,
}

/// Any value starting with `y` turns the option on.
fn parse_yes(value: &str) -> Result<bool, String> {
    Ok(value.starts_with('y'))
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(exit_codes::INVALID);
        }
    };
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LifeConfig::default(),
    };
    let request = RunRequest {
        rows: cli.rows,
        columns: cli.columns,
        generations: cli.generations,
        input: cli.input,
        print: cli.print.unwrap_or(false),
        pause: cli.pause.unwrap_or(false),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Game of Life").context("write banner")?;
    let report = run_life(&request, &config, &mut out, &StdinPauser)?;
    write_summary(&mut out, &report, cli.json)?;
    out.flush().context("flush stdout")?;
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CoreError>() {
        Some(CoreError::EmptyPattern) => exit_codes::NO_LIFE,
        _ => exit_codes::INVALID,
    }
}
