//! Command handlers for the LitTime CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod run;

use anyhow::Result;
use std::path::Path;

use littime::Config;

/// Load the config named by `--config`, or the discovered one.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
