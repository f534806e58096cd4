//! Logging setup for the CLI.
//!
//! The library only emits `tracing` events; the binary decides where they
//! go. Output is a compact fmt layer on stderr so stdout stays clean for
//! results.

use clap::Args;
use tracing::level_filters::LevelFilter;

/// Verbosity flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct LoggingOpts {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,
}

impl LoggingOpts {
    pub fn to_level_filter(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::ERROR
        } else {
            match self.debug {
                0 => LevelFilter::WARN,
                1 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        }
    }

    /// Install the global subscriber.
    ///
    /// Does nothing if a subscriber is already set, which happens when
    /// commands are driven from tests.
    pub fn configure_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_max_level(self.to_level_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init();
    }
}
