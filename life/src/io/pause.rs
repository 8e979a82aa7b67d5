//! Interactive pause between generations.
//!
//! The [`Pauser`] trait decouples the run loop from the terminal. Tests use a
//! scripted pauser that records calls without blocking.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

pub trait Pauser {
    /// Block until the user asks for the next generation.
    fn pause(&self, remaining: u32) -> Result<()>;
}

/// Prompts on stdout and waits for a line on stdin.
pub struct StdinPauser;

impl Pauser for StdinPauser {
    fn pause(&self, remaining: u32) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(
            stdout,
            "\nPress 'Enter' for next generation. There are {remaining} generations left."
        )
        .context("write pause prompt")?;
        stdout.flush().context("flush pause prompt")?;
        drop(stdout);

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read pause input")?;
        Ok(())
    }
}
