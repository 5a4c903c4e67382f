// verdict/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "Validation & rules engine for product customizers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ✅ Validates a selection state against a configuration snapshot
    Validate {
        /// Snapshot file (components + rules), YAML or JSON
        #[arg(long, short)]
        snapshot: PathBuf,

        /// Selections file (component id -> option id or list), YAML or JSON
        #[arg(long)]
        selections: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Directory holding an optional verdict.yaml
        #[arg(long, env = "VERDICT_CONFIG_DIR", default_value = ".")]
        config_dir: PathBuf,
    },

    /// 🩺 Loads a snapshot and checks its integrity (ids, cardinality, limits)
    Check {
        #[arg(long, short)]
        snapshot: PathBuf,

        #[arg(long, env = "VERDICT_CONFIG_DIR", default_value = ".")]
        config_dir: PathBuf,
    },

    /// 📋 Lists rules in evaluation order
    Explain {
        #[arg(long, short)]
        snapshot: PathBuf,

        #[arg(long, env = "VERDICT_CONFIG_DIR", default_value = ".")]
        config_dir: PathBuf,
    },
}
