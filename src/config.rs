//! Runtime configuration for the terminal game.
//!
//! Values come from environment variables first and are then overridden by
//! command-line flags. A bad environment value falls back to its default and
//! leaves a note in [`GameConfig::warnings`] (logging is not up yet when the
//! config is read); a bad flag is an error.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::logging::default_log_dir;
use crate::types::{DEFAULT_DIM, MAX_DIM, MIN_DIM};

pub const ENV_DIM: &str = "TUI2048_DIM";
pub const ENV_SEED: &str = "TUI2048_SEED";
pub const ENV_LOG_DIR: &str = "TUI2048_LOG_DIR";
pub const ENV_CELL_W: &str = "TUI2048_CELL_W";

pub const DEFAULT_CELL_W: u16 = 7;
const MIN_CELL_W: u16 = 3;
const MAX_CELL_W: u16 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dim: usize,
    pub seed: u64,
    pub log_dir: PathBuf,
    /// Terminal columns per tile; rows are derived from it.
    pub cell_w: u16,
    pub warnings: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            seed: time_seed(),
            log_dir: default_log_dir(),
            cell_w: DEFAULT_CELL_W,
            warnings: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TUI2048_DIM` - grid dimension (default: 4)
    /// - `TUI2048_SEED` - spawn and palette seed (default: derived from the clock)
    /// - `TUI2048_LOG_DIR` - log directory (default: platform cache dir)
    /// - `TUI2048_CELL_W` - terminal columns per tile (default: 7)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DIM) {
            match parse_dim(&raw) {
                Some(dim) => config.dim = dim,
                None => config.warnings.push(format!(
                    "ignoring {ENV_DIM}={raw:?}: expected {MIN_DIM}..={MAX_DIM}"
                )),
            }
        }

        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = seed,
                Err(_) => config
                    .warnings
                    .push(format!("ignoring {ENV_SEED}={raw:?}: expected an unsigned integer")),
            }
        }

        if let Some(raw) = lookup(ENV_LOG_DIR) {
            if raw.trim().is_empty() {
                config
                    .warnings
                    .push(format!("ignoring empty {ENV_LOG_DIR}"));
            } else {
                config.log_dir = PathBuf::from(raw);
            }
        }

        if let Some(raw) = lookup(ENV_CELL_W) {
            match raw.trim().parse::<u16>() {
                Ok(w) if (MIN_CELL_W..=MAX_CELL_W).contains(&w) => config.cell_w = w,
                _ => config.warnings.push(format!(
                    "ignoring {ENV_CELL_W}={raw:?}: expected {MIN_CELL_W}..={MAX_CELL_W}"
                )),
            }
        }

        config
    }

    /// Apply command-line flags on top of the current values.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--dim" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --dim"))?;
                    self.dim = parse_dim(v).ok_or_else(|| {
                        anyhow!("invalid --dim value: {} (expected {}..={})", v, MIN_DIM, MAX_DIM)
                    })?;
                }
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                "--log-dir" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log-dir"))?;
                    self.log_dir = PathBuf::from(v);
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(())
    }

    /// Terminal rows per tile.
    pub fn cell_h(&self) -> u16 {
        self.cell_w.div_ceil(2)
    }
}

fn parse_dim(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|d| (MIN_DIM..=MAX_DIM).contains(d))
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
