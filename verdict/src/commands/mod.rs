// verdict/src/commands/mod.rs

pub mod check;
pub mod explain;
pub mod validate;

use std::path::Path;
use tracing::info;

use verdict_core::application::engine_from_files;
use verdict_core::{ValidationEngine, VerdictError};

/// Builds the engine for a command. A rejected snapshot is printed as a
/// miette diagnostic and ends the process; load failures bubble up.
pub(crate) fn load_engine(snapshot_path: &Path, config_dir: &Path) -> anyhow::Result<ValidationEngine> {
    info!(path = ?snapshot_path, config_dir = ?config_dir, "Building validation engine");

    match engine_from_files(snapshot_path, config_dir) {
        Ok(engine) => Ok(engine),
        Err(VerdictError::Domain(err)) => {
            eprintln!("{:?}", miette::Report::new(err));
            eprintln!("\n❌ Snapshot rejected.");
            std::process::exit(1);
        }
        Err(VerdictError::Infrastructure(err)) => Err(anyhow::Error::new(err)
            .context(format!("Failed to load snapshot {:?}", snapshot_path))),
    }
}
