//! Wavescan CLI
//!
//! Command-line interface for inspecting and decoding WAVE files.

use clap::Parser;
use env_logger::Env;
use log::info;

use wavescan::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger; --verbose raises the default filter to debug
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Wavescan v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Info { path, json }) => commands::info(&path, json),
        Some(Commands::Decode { path }) => commands::decode(&path),
        None => {
            println!("Wavescan v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}
