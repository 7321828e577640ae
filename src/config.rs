//! Environment-driven settings. Command-line flags override these.

use std::env;
use std::path::PathBuf;

pub const DATA_FILE_VAR: &str = "FITNESS_TRACKER_DATA";
pub const LOG_FILTER_VAR: &str = "FITNESS_TRACKER_LOG";

pub const DEFAULT_DATA_FILE: &str = "workouts.txt";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Workout file used when no path is given on the command line.
    pub data_file: PathBuf,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            data_file: get(DATA_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            log_filter: get(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        }
    }

    pub fn with_data_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.data_file = path;
        }
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.log_filter = "debug".to_string();
        }
        self
    }
}
