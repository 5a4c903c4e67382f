// verdict-core/src/domain/verdict.rs

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    RequiredComponent,
    MinSelections,
    MaxSelections,
    OutOfStock,
    RuleError,
    RuleWarning,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequiredComponent => "REQUIRED_COMPONENT",
            Self::MinSelections => "MIN_SELECTIONS",
            Self::MaxSelections => "MAX_SELECTIONS",
            Self::OutOfStock => "OUT_OF_STOCK",
            Self::RuleError => "RULE_ERROR",
            Self::RuleWarning => "RULE_WARNING",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub code: IssueCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn for_component(
        code: IssueCode,
        component_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            component_id: Some(component_id.into()),
            rule_id: None,
            message: message.into(),
        }
    }

    pub fn for_rule(code: IssueCode, rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            component_id: None,
            rule_id: Some(rule_id.into()),
            message: message.into(),
        }
    }
}

/// The engine's sole output. Warnings never affect `valid`.
///
/// The last three fields are the UI effects of fired rules; they are left
/// out of the serialized form when empty.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    #[serde(default)]
    pub applied_rules: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub hidden_components: BTreeSet<String>,
    /// Component id -> option ids the shopper may not pick.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub disabled_options: BTreeMap<String, BTreeSet<String>>,
    /// Component id -> option id expected to be picked.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub required_options: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn new(
        errors: Vec<ValidationIssue>,
        warnings: Vec<ValidationIssue>,
        applied_rules: Vec<String>,
    ) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            applied_rules,
            hidden_components: BTreeSet::new(),
            disabled_options: BTreeMap::new(),
            required_options: BTreeMap::new(),
        }
    }

    pub fn has_error(&self, code: IssueCode, component_id: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.code == code && e.component_id.as_deref() == Some(component_id))
    }

    pub fn is_option_disabled(&self, component_id: &str, option_id: &str) -> bool {
        self.disabled_options
            .get(component_id)
            .is_some_and(|ids| ids.contains(option_id))
    }

    pub fn error_codes(&self) -> Vec<IssueCode> {
        self.errors.iter().map(|e| e.code).collect()
    }

    /// Errors and warnings attached to one component, for inline badges.
    pub fn issues_for<'a>(&'a self, component_id: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .filter(move |i| i.component_id.as_deref() == Some(component_id))
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_follows_errors_only() {
        let warnings = vec![
            ValidationIssue::for_rule(IssueCode::RuleWarning, "r1", "careful"),
            ValidationIssue::for_rule(IssueCode::RuleWarning, "r2", "really"),
        ];
        assert!(ValidationResult::new(vec![], warnings, vec![]).valid);

        let errors = vec![ValidationIssue::for_component(
            IssueCode::OutOfStock,
            "c",
            "gone",
        )];
        let result = ValidationResult::new(errors, vec![], vec![]);
        assert!(!result.valid);
        assert!(result.has_error(IssueCode::OutOfStock, "c"));
        assert_eq!(result.issues_for("c").count(), 1);
    }

    #[test]
    fn test_serialized_codes() {
        assert_eq!(
            serde_json::to_string(&IssueCode::RequiredComponent).ok(),
            Some("\"REQUIRED_COMPONENT\"".to_string())
        );
        assert_eq!(IssueCode::MaxSelections.to_string(), "MAX_SELECTIONS");
    }
}
