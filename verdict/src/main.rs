// verdict/src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug verdict validate ... pour voir chaque règle déclenchée
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: VALIDATE SELECTIONS ---
        Commands::Validate {
            snapshot,
            selections,
            format,
            config_dir,
        } => commands::validate::execute(snapshot, selections, format, config_dir),

        // --- USE CASE: SNAPSHOT INTEGRITY ---
        Commands::Check {
            snapshot,
            config_dir,
        } => commands::check::execute(snapshot, config_dir),

        // --- USE CASE: RULE ORDER ---
        Commands::Explain {
            snapshot,
            config_dir,
        } => commands::explain::execute(snapshot, config_dir),
    }
}
