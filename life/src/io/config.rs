//! Optional TOML configuration for pattern parsing and rendering.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

use crate::core::pattern::DEFAULT_ALIVE_MARKERS;

/// Life configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults of
/// the classic `x`/`o` pattern format.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LifeConfig {
    /// Characters that mark an alive cell in pattern files.
    pub alive_markers: String,

    pub render: RenderConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Glyph printed for alive cells.
    pub alive: char,
    /// Glyph printed for dead cells.
    pub dead: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alive: 'x',
            dead: ' ',
        }
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            alive_markers: DEFAULT_ALIVE_MARKERS.iter().collect(),
            render: RenderConfig::default(),
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.alive_markers.is_empty() {
            return Err(anyhow!("alive_markers must not be empty"));
        }
        if self.alive_markers.chars().any(char::is_whitespace) {
            return Err(anyhow!("alive_markers must not contain whitespace"));
        }
        if self.render.alive == self.render.dead {
            return Err(anyhow!("render.alive and render.dead must differ"));
        }
        Ok(())
    }

    pub fn markers(&self) -> Vec<char> {
        self.alive_markers.chars().collect()
    }
}

/// Load config from a TOML file.
pub fn load_config(path: &Path) -> Result<LifeConfig> {
    debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LifeConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
