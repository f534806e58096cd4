//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::types::Config;

/// Config file looked up in the working directory before the user config.
pub const LOCAL_CONFIG_FILE: &str = "littime.toml";

/// Get the config file path (~/.config/littime/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Get the config directory path (~/.config/littime)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("littime"))
}

/// Find the config file to use, if any.
///
/// Checks `./littime.toml` first, then the user config path.
pub fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    config_path().ok().filter(|path| path.is_file())
}

/// Load configuration from the discovered file, or return defaults if none exists
pub fn load() -> Result<Config> {
    match discover() {
        Some(path) => load_from(&path),
        None => {
            info!("Config file not found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from an explicit path
pub fn load_from(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid config {:?}: {}", path, e))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Save configuration to the user config path
pub fn save(config: &Config) -> Result<PathBuf> {
    let config_path = config_path()?;
    save_to(config, &config_path)?;
    Ok(config_path)
}

/// Save configuration to an explicit path
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    // Ensure config directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}
