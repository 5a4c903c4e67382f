// verdict-core/src/infrastructure/config/settings.rs

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

use super::files::load_document;
use crate::domain::snapshot::SnapshotLimits;
use crate::infrastructure::error::InfrastructureError;

const SETTINGS_FILES: [&str; 2] = ["verdict.yaml", "verdict.yml"];

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EngineSettings {
    #[serde(default)]
    pub limits: SnapshotLimits,
}

/// Settings from an optional `verdict.yaml` in `dir`, then `VERDICT_*`
/// environment overrides. A missing file means defaults.
#[instrument]
pub fn load_settings(dir: &Path) -> Result<EngineSettings, InfrastructureError> {
    let mut settings = match SETTINGS_FILES.iter().map(|f| dir.join(f)).find(|p| p.exists()) {
        Some(path) => {
            info!(path = ?path, "Loading engine settings");
            load_document(&path)?
        }
        None => EngineSettings::default(),
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

fn apply_env_overrides(
    settings: &mut EngineSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), InfrastructureError> {
    let limits = &mut settings.limits;
    let overrides: [(&str, &mut usize); 3] = [
        ("VERDICT_MAX_RULES", &mut limits.max_rules),
        ("VERDICT_MAX_CONDITIONS_PER_RULE", &mut limits.max_conditions_per_rule),
        ("VERDICT_MAX_ACTIONS_PER_RULE", &mut limits.max_actions_per_rule),
    ];

    for (key, slot) in overrides {
        if let Some(raw) = lookup(key) {
            let value = raw.trim().parse::<usize>().map_err(|_| {
                InfrastructureError::ConfigError(format!(
                    "{} must be a non-negative integer, got '{}'",
                    key, raw
                ))
            })?;
            info!(key, old = *slot, new = value, "Overriding limit via ENV");
            *slot = value;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() -> Result<()> {
        let dir = tempdir()?;
        let settings = load_settings(dir.path())?;
        assert_eq!(settings.limits, SnapshotLimits::default());
        Ok(())
    }

    #[test]
    fn test_file_values_with_partial_limits() -> Result<()> {
        let dir = tempdir()?;
        std::fs::write(
            dir.path().join("verdict.yaml"),
            "limits:\n  max_rules: 12\n",
        )?;
        let settings: EngineSettings = load_document(&dir.path().join("verdict.yaml"))?;
        assert_eq!(settings.limits.max_rules, 12);
        assert_eq!(
            settings.limits.max_conditions_per_rule,
            SnapshotLimits::default().max_conditions_per_rule
        );
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let env: HashMap<&str, &str> = HashMap::from([
            ("VERDICT_MAX_RULES", "7"),
            ("VERDICT_MAX_ACTIONS_PER_RULE", " 2 "),
        ]);
        let mut settings = EngineSettings::default();
        apply_env_overrides(&mut settings, |k| env.get(k).map(|v| v.to_string()))?;
        assert_eq!(settings.limits.max_rules, 7);
        assert_eq!(settings.limits.max_actions_per_rule, 2);
        assert_eq!(settings.limits.max_conditions_per_rule, 10);
        Ok(())
    }

    #[test]
    fn test_unparsable_override() {
        let mut settings = EngineSettings::default();
        let err = apply_env_overrides(&mut settings, |k| {
            (k == "VERDICT_MAX_RULES").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, InfrastructureError::ConfigError(_)));
    }
}
