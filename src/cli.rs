//! CLI definitions for LitTime
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be exercised by tests and reused for completion generation.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::estimator::ReadabilityFormula;
use crate::logging::LoggingOpts;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "littime")]
#[command(about = "[ LitTime ] - estimate how long a text takes to read")]
#[command(
    long_about = "LitTime - estimate reading time from word, sentence and syllable counts.

The base reading speed is adjusted by a Flesch-Kincaid style readability
index: hard texts are read 20% slower, and texts with pictures or tables
take 10% longer. Russian and English text can be mixed freely.

QUICK START:
    littime run -f article.txt           Estimate and show the result
    littime run -f article.txt --plain   Print a plain summary
    littime run -i                       Fill in the options interactively
    littime config show                  Show the effective configuration"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use this config file instead of ./littime.toml or ~/.config/littime/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the reading time of a text file
    #[command(long_about = "Estimate the reading time of a text file.

The file is read into memory, tokenized into words and sentences, and the
syllables are counted across a pool of workers. The result is saved as JSON
(see [output].file in the config) and shown in an interactive view.

EXAMPLES:
    littime run -f book.txt                   Use configured defaults
    littime run -f book.txt -s 250 -v         250 wpm, text has pictures
    littime run -f book.txt -w 8 --no-save    8 workers, skip the JSON file
    littime run -i                            Interactive setup form")]
    Run(RunArgs),

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and create the LitTime configuration file.

Configuration is read from ./littime.toml if present, otherwise from
~/.config/littime/config.toml. Missing files fall back to defaults.

EXAMPLES:
    littime config show      Display current configuration
    littime config init      Write the default configuration file
    littime config path      Print which config file is used"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Print a shell completion script to stdout.

EXAMPLES:
    littime completions bash > ~/.local/share/bash-completion/completions/littime
    littime completions zsh > ~/.zfunc/_littime")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

/// Options of the `run` command. Unset values fall back to the config.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Path to the text file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Reading speed in words per minute
    #[arg(short, long, value_name = "WPM", value_parser = clap::value_parser!(u32).range(1..))]
    pub speed: Option<u32>,

    /// The text contains visual elements (pictures, tables, charts)
    #[arg(short, long)]
    pub visuals: bool,

    /// Number of syllable-counting workers (0 is treated as 1)
    #[arg(short, long, value_name = "N")]
    pub workers: Option<usize>,

    /// Enable interactive mode for setting options
    #[arg(short, long)]
    pub interactive: bool,

    /// Write the JSON result here instead of the configured file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not write the JSON result
    #[arg(long, conflicts_with = "output")]
    pub no_save: bool,

    /// Print a plain summary instead of the interactive result view
    #[arg(long)]
    pub plain: bool,

    /// Count hyphenated compounds as separate words
    #[arg(long)]
    pub split_hyphens: bool,

    /// Readability formula: russian or flesch
    #[arg(long, value_name = "NAME")]
    pub formula: Option<ReadabilityFormula>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Write the default configuration file if it does not exist
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the path of the config file in use
    Path,
}
