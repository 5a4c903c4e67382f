// verdict-core/src/application/bootstrap.rs

use std::path::Path;
use tracing::instrument;

use super::engine::ValidationEngine;
use crate::error::VerdictError;
use crate::infrastructure::config::{load_settings, load_snapshot};

/// Builds an engine from a snapshot file, honouring `verdict.yaml` and
/// `VERDICT_*` overrides found for `config_dir`.
#[instrument]
pub fn engine_from_files(
    snapshot_path: &Path,
    config_dir: &Path,
) -> Result<ValidationEngine, VerdictError> {
    let settings = load_settings(config_dir)?;
    let snapshot = load_snapshot(snapshot_path)?;
    Ok(ValidationEngine::from_snapshot(snapshot, settings.limits)?)
}
