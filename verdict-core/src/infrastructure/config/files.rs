// verdict-core/src/infrastructure/config/files.rs
//
// Loaders for snapshot and selection files exported from the customizer
// configuration store (YAML or JSON, picked by extension).

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::selection::SelectionState;
use crate::domain::snapshot::Snapshot;
use crate::infrastructure::error::InfrastructureError;

#[instrument]
pub fn load_snapshot(path: &Path) -> Result<Snapshot, InfrastructureError> {
    let snapshot: Snapshot = load_document(path)?;
    info!(
        components = snapshot.components.len(),
        options = snapshot.option_count(),
        rules = snapshot.rules.len(),
        "Snapshot file loaded"
    );
    Ok(snapshot)
}

#[instrument]
pub fn load_selections(path: &Path) -> Result<SelectionState, InfrastructureError> {
    let selections: SelectionState = load_document(path)?;
    info!(selected = selections.len(), "Selections file loaded");
    Ok(selections)
}

enum Format {
    Yaml,
    Json,
}

fn detect_format(path: &Path) -> Result<Format, InfrastructureError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(InfrastructureError::UnsupportedFormat(
            path.display().to_string(),
        )),
    }
}

/// Reads and deserializes a whole document of type `T` from `path`.
pub(crate) fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, InfrastructureError> {
    let format = detect_format(path)?;
    let display = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|source| InfrastructureError::ReadError {
        path: display.clone(),
        source,
    })?;

    match format {
        Format::Yaml => serde_yaml::from_str(&content)
            .map_err(|source| InfrastructureError::YamlError { path: display, source }),
        Format::Json => serde_json::from_str(&content)
            .map_err(|source| InfrastructureError::JsonError { path: display, source }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::selection::Selection;
    use anyhow::Result;
    use tempfile::tempdir;

    const SNAPSHOT_YAML: &str = r#"
components:
  - id: color
    name: Color
    type: COLOR
    isRequired: true
    iconUrl: https://cdn.example.com/color.svg
    options:
      - id: red
        name: Red
        inStock: true
      - id: blue
        name: Blue
        stockQuantity: 0
rules:
  - id: blue-warning
    name: Blue fades
    conditions:
      - componentId: color
        operator: eq
        value: blue
    actions:
      - type: SHOW_WARNING
        value: Blue may fade in sunlight
"#;

    #[test]
    fn test_load_yaml_snapshot() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("snapshot.yaml");
        fs::write(&path, SNAPSHOT_YAML)?;

        let snapshot = load_snapshot(&path)?;
        assert_eq!(snapshot.components.len(), 1);
        assert_eq!(snapshot.option_count(), 2);
        assert!(snapshot.components[0].options[1].is_out_of_stock());
        assert_eq!(snapshot.rules[0].id, "blue-warning");
        Ok(())
    }

    #[test]
    fn test_load_json_selections() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("selections.json");
        fs::write(&path, r#"{"color": "red", "charms": ["a", "b"]}"#)?;

        let selections = load_selections(&path)?;
        assert_eq!(selections.get("color"), Some(&Selection::Single("red".into())));
        assert_eq!(selections.count("charms"), 2);
        Ok(())
    }

    #[test]
    fn test_empty_yaml_document_is_empty_snapshot() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.yml");
        fs::write(&path, "{}")?;
        assert_eq!(load_snapshot(&path)?, Snapshot::default());
        Ok(())
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_snapshot(Path::new("snapshot.toml")).unwrap_err();
        assert!(matches!(err, InfrastructureError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_snapshot(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, InfrastructureError::ReadError { .. }));
    }

    #[test]
    fn test_invalid_condition_reports_path() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bad.yaml");
        fs::write(
            &path,
            "rules:\n  - id: r\n    conditions:\n      - componentId: c\n        operator: in\n        value: a\n",
        )?;
        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, InfrastructureError::YamlError { .. }));
        assert!(err.to_string().contains("bad.yaml"));
        Ok(())
    }
}
