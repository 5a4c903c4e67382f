// verdict-core/src/domain/selection.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// What the shopper picked for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Selection {
    Single(String),
    Multiple(Vec<String>),
}

impl Selection {
    /// Selected option ids, skipping blank entries.
    pub fn option_ids(&self) -> impl Iterator<Item = &str> {
        let ids: &[String] = match self {
            Self::Single(id) => std::slice::from_ref(id),
            Self::Multiple(ids) => ids,
        };
        ids.iter().map(String::as_str).filter(|id| !id.is_empty())
    }

    pub fn count(&self) -> usize {
        self.option_ids().count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn contains(&self, option_id: &str) -> bool {
        self.option_ids().any(|id| id == option_id)
    }

    /// Numeric reading of a scalar selection (quantities, sizes...).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Single(raw) => raw.trim().parse().ok(),
            Self::Multiple(_) => None,
        }
    }

    // Lenient conversion: anything that is not text, a number or a list of
    // those degrades to "not selected".
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Single(s)),
            Value::Number(n) => Some(Self::Single(n.to_string())),
            Value::Array(items) => Some(Self::Multiple(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            )),
            Value::Null | Value::Bool(_) | Value::Object(_) => None,
        }
    }
}

impl From<&str> for Selection {
    fn from(id: &str) -> Self {
        Self::Single(id.to_string())
    }
}

impl From<Vec<&str>> for Selection {
    fn from(ids: Vec<&str>) -> Self {
        Self::Multiple(ids.into_iter().map(str::to_string).collect())
    }
}

/// Component id -> selection. Passed fresh on every `validate()` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionState(BTreeMap<String, Selection>);

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, component_id: impl Into<String>, selection: impl Into<Selection>) -> Self {
        self.insert(component_id, selection);
        self
    }

    pub fn insert(&mut self, component_id: impl Into<String>, selection: impl Into<Selection>) {
        self.0.insert(component_id.into(), selection.into());
    }

    pub fn remove(&mut self, component_id: &str) -> Option<Selection> {
        self.0.remove(component_id)
    }

    /// `None` is the explicit "no selection" case.
    pub fn get(&self, component_id: &str) -> Option<&Selection> {
        self.0.get(component_id)
    }

    pub fn count(&self, component_id: &str) -> usize {
        self.get(component_id).map_or(0, Selection::count)
    }

    pub fn is_selected(&self, component_id: &str) -> bool {
        self.count(component_id) > 0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Selection)> for SelectionState {
    fn from_iter<I: IntoIterator<Item = (K, Selection)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'de> Deserialize<'de> for SelectionState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(k, v)| Selection::from_value(v).map(|s| (k, s)))
                .collect(),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_deserialize_scalar_and_list() -> Result<()> {
        let yaml = "color: red\naccessories: [strap, charm]\n";
        let state: SelectionState = serde_yaml::from_str(yaml)?;
        assert_eq!(state.get("color"), Some(&Selection::Single("red".into())));
        assert_eq!(state.count("accessories"), 2);
        assert!(state.get("size").is_none());
        Ok(())
    }

    #[test]
    fn test_malformed_entries_degrade_to_unselected() -> Result<()> {
        let json = r#"{"a": null, "b": true, "c": {"x": 1}, "d": "", "e": [], "f": 42}"#;
        let state: SelectionState = serde_json::from_str(json)?;
        assert!(state.get("a").is_none());
        assert!(state.get("b").is_none());
        assert!(state.get("c").is_none());
        assert!(!state.is_selected("d"));
        assert!(!state.is_selected("e"));
        assert_eq!(state.get("f").and_then(Selection::as_number), Some(42.0));
        Ok(())
    }

    #[test]
    fn test_counts() {
        let state = SelectionState::new()
            .with("single", "opt-1")
            .with("multi", vec!["m1", "", "m2"]);
        assert_eq!(state.count("single"), 1);
        assert_eq!(state.count("multi"), 2);
        assert_eq!(state.count("missing"), 0);
        assert!(state.get("multi").unwrap().contains("m2"));
    }
}
