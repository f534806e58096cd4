//! LitTime - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use littime::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();
    cli.logging.configure_logging();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Run(args) => commands::run::handle(&args, config_path),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, force),
            ConfigCommands::Path => commands::config::handle_path(config_path),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
