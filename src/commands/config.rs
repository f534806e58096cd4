//! Config subcommands handler

use anyhow::Result;
use std::path::{Path, PathBuf};

use littime::tui::current_theme;
use littime::Config;

use super::load_config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(explicit: Option<&Path>) -> Result<()> {
    let config = load_config(explicit)?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Write the default configuration unless a file already exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let theme = current_theme();
    let target = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    if target.exists() && !force {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "Config already exists at {} (use --force to overwrite)",
                target.display()
            ))
        );
        return Ok(());
    }

    let config = Config::default();
    let path = match explicit {
        Some(path) => {
            config.save_to(path)?;
            path.to_path_buf()
        }
        None => config.save()?,
    };
    println!(
        "{} {}",
        theme.primary_text("Wrote default config to"),
        theme.accent_text(&path.display().to_string())
    );
    Ok(())
}

/// Print which config file is in use.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    let theme = current_theme();
    match resolve_path(explicit) {
        Some(path) => println!("{}", path.display()),
        None => {
            let fallback = Config::config_path()?;
            println!(
                "{}",
                theme.secondary_text(&format!(
                    "No config file found, using defaults ({} would be read)",
                    fallback.display()
                ))
            );
        }
    }
    Ok(())
}

fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Config::discover(),
    }
}
