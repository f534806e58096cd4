//! Configuration management for LitTime

mod io;
mod types;

pub use io::LOCAL_CONFIG_FILE;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::estimator::EstimateOptions;

impl Config {
    /// Get the config file path (~/.config/littime/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Path of the config file `load()` would read, if one exists
    pub fn discover() -> Option<PathBuf> {
        io::discover()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to the user config file, returning its path
    pub fn save(&self) -> Result<PathBuf> {
        io::save(self)
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check values that deserialize fine but cannot drive an estimate.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.estimator.default_reading_speed == 0 {
            return Err("estimator.default_reading_speed must be greater than 0".to_string());
        }
        if self.output.file.trim().is_empty() {
            return Err("output.file must not be empty".to_string());
        }
        Ok(())
    }

    /// Estimation options built from the configured defaults
    pub fn estimate_options(&self) -> EstimateOptions {
        EstimateOptions::new(f64::from(self.estimator.default_reading_speed))
            .visuals(self.estimator.has_visuals)
            .workers(self.estimator.default_workers)
            .hyphen_policy(self.estimator.hyphenated_words)
            .formula(self.estimator.formula)
    }

    /// Output path for the JSON result
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output.file)
    }
}
