//! Session configuration.
//!
//! Settings are fixed for the lifetime of the process. They come from an
//! optional JSON file named by `MEMORY_CONFIG`, then individual environment
//! variables override single fields:
//!
//! - `MEMORY_WIDTH`: grid columns (default 4)
//! - `MEMORY_HEIGHT`: grid rows (default 4)
//! - `MEMORY_TIME_LIMIT`: seconds per session (default 60)
//! - `MEMORY_SEED`: fixed board seed (default: random per process)
//!
//! Only an upper bound on the grid sides is checked here; an odd or empty grid
//! is rejected when a session starts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    Theme, DEFAULT_HEIGHT, DEFAULT_TIME_LIMIT_SECS, DEFAULT_WIDTH, MAX_GRID_SIDE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("time limit must be at least one second")]
    ZeroTimeLimit,
    #[error(
        "grid {width}x{height} is too large: each side must be at most {max}",
        max = MAX_GRID_SIDE
    )]
    GridTooLarge { width: u16, height: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Columns.
    pub width: u16,
    /// Rows.
    pub height: u16,
    pub time_limit_secs: u32,
    /// Fixed seed for reproducible boards.
    pub seed: Option<u32>,
    pub theme: Theme,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            seed: None,
            theme: Theme::default(),
        }
    }
}

impl GameConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup("MEMORY_CONFIG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(width) = parse_var(&lookup, "MEMORY_WIDTH") {
            config.width = width;
        }
        if let Some(height) = parse_var(&lookup, "MEMORY_HEIGHT") {
            config.height = height;
        }
        if let Some(limit) = parse_var(&lookup, "MEMORY_TIME_LIMIT") {
            config.time_limit_secs = limit;
        }
        if let Some(seed) = parse_var(&lookup, "MEMORY_SEED") {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_limit_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if self.width > MAX_GRID_SIDE || self.height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("ignoring {key}={raw:?}: not a valid number");
            None
        }
    }
}
