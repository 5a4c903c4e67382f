// verdict-core/src/domain/rules/rule.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::action::RuleAction;
use super::condition::Condition;
use crate::domain::default_true;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    #[default]
    Validation,
    Dependency,
    Exclusion,
    Visibility,
    Pricing,
}

/// Declarative condition -> action trigger layered above the built-in checks.
///
/// All conditions must hold for the rule to fire (an empty list always holds).
/// `priority` orders evaluation, higher first; it never decides whether a
/// rule fires. A fired rule with `stop_processing` ends rule evaluation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[validate(length(min = 1, message = "Rule id cannot be empty"))]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub rule_type: RuleType,

    #[serde(default = "default_true")]
    pub is_enabled: bool,

    #[serde(default)]
    pub priority: i32,

    #[serde(default)]
    pub stop_processing: bool,

    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub actions: Vec<RuleAction>,
}

impl Rule {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rule_type: RuleType::Validation,
            is_enabled: true,
            priority: 0,
            stop_processing: false,
            conditions: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn then(mut self, action: RuleAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn stopping(mut self) -> Self {
        self.stop_processing = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }
}
