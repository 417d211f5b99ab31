use std::{env, fmt, str::FromStr};

use crate::constants::{DEFAULT_COLS, DEFAULT_ROWS};

pub const COLS_KEY: &str = "MAZE_COLS";
pub const ROWS_KEY: &str = "MAZE_ROWS";
pub const SEED_KEY: &str = "MAZE_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
    OutOfRange { key: &'static str, reason: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value '{}' for {}", value, key)
            }
            ConfigError::OutOfRange { key, reason } => write!(f, "{} {}", key, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Dimensions and random seed of a maze. Passed to `MazeMaker::new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub cols: usize,
    pub rows: usize,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Reads `MAZE_COLS`, `MAZE_ROWS` and `MAZE_SEED`, after loading a `.env`
    /// file if there is one. Dimensions are not range-checked here; a zero
    /// dimension is rejected when the generator is built.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();

        let defaults = Self::default();
        Ok(Self {
            cols: env_var(COLS_KEY, defaults.cols)?,
            rows: env_var(ROWS_KEY, defaults.rows)?,
            seed: env_var_opt(SEED_KEY)?,
        })
    }
}

pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

pub fn env_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    parse_var(key, env::var(key).ok(), default)
}

pub fn env_var_opt<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    parse_var_opt(key, env::var(key).ok())
}

/// Parses a raw variable, falling back to `default` when it is unset or blank.
pub fn parse_var<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    Ok(parse_var_opt(key, raw)?.unwrap_or(default))
}

pub fn parse_var_opt<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = raw else {
        return Ok(None);
    };

    let trimmed = value.trim().trim_matches('"').trim_matches('\'');
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid { key, value })
}
