//! Match configuration loaded from TOML.

use crate::{Seat, Seats};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Grid sizes offered by the settings menu.
pub const GRID_SIZE_RANGE: RangeInclusive<usize> = 3..=8;

/// Accepted human-input poll intervals, in milliseconds.
pub const POLL_INTERVAL_RANGE: RangeInclusive<u64> = 1..=1000;

/// Settings for a match.
///
/// Deserializing validates every field, so a `MatchConfig` is always in range.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "MatchConfigFile")]
pub struct MatchConfig {
    /// Grid rows.
    rows: usize,
    /// Grid columns.
    cols: usize,
    /// Longest wait between checks for a human selection.
    poll_interval_ms: u64,
    /// Pause before each computer move, for watching computer-only matches.
    think_time_ms: u64,
    /// Seed for the opponent's random fallback; entropy when absent.
    seed: Option<u64>,
    /// Who plays X.
    x_seat: Seat,
    /// Who plays O.
    o_seat: Seat,
}

/// Config file contents before validation.
#[derive(Deserialize)]
struct MatchConfigFile {
    #[serde(default = "default_dimension")]
    rows: usize,

    #[serde(default = "default_dimension")]
    cols: usize,

    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,

    #[serde(default)]
    think_time_ms: u64,

    #[serde(default)]
    seed: Option<u64>,

    #[serde(default = "default_x_seat")]
    x_seat: Seat,

    #[serde(default = "default_o_seat")]
    o_seat: Seat,
}

impl TryFrom<MatchConfigFile> for MatchConfig {
    type Error = ConfigError;

    fn try_from(file: MatchConfigFile) -> Result<Self, Self::Error> {
        let config = Self {
            rows: file.rows,
            cols: file.cols,
            poll_interval_ms: file.poll_interval_ms,
            think_time_ms: file.think_time_ms,
            seed: file.seed,
            x_seat: file.x_seat,
            o_seat: file.o_seat,
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_dimension() -> usize {
    3
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_x_seat() -> Seat {
    Seat::Human
}

fn default_o_seat() -> Seat {
    Seat::Computer
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rows: default_dimension(),
            cols: default_dimension(),
            poll_interval_ms: default_poll_interval_ms(),
            think_time_ms: 0,
            seed: None,
            x_seat: default_x_seat(),
            o_seat: default_o_seat(),
        }
    }
}

impl MatchConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(rows = config.rows, cols = config.cols, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Checks every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !GRID_SIZE_RANGE.contains(&self.rows) || !GRID_SIZE_RANGE.contains(&self.cols) {
            return Err(ConfigError::new(format!(
                "Grid size {}x{} outside {}..={}",
                self.rows,
                self.cols,
                GRID_SIZE_RANGE.start(),
                GRID_SIZE_RANGE.end()
            )));
        }
        if !POLL_INTERVAL_RANGE.contains(&self.poll_interval_ms) {
            return Err(ConfigError::new(format!(
                "Poll interval {}ms outside {}..={}",
                self.poll_interval_ms,
                POLL_INTERVAL_RANGE.start(),
                POLL_INTERVAL_RANGE.end()
            )));
        }
        Ok(())
    }

    /// Replaces the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the seat assignment.
    #[must_use]
    pub fn with_seats(mut self, seats: Seats) -> Self {
        self.x_seat = seats.x;
        self.o_seat = seats.o;
        self
    }

    /// Seat assignment for both marks.
    pub fn seats(&self) -> Seats {
        Seats::new(self.x_seat, self.o_seat)
    }

    /// Poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Computer think time as a [`Duration`].
    pub fn think_time(&self) -> Duration {
        Duration::from_millis(self.think_time_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
