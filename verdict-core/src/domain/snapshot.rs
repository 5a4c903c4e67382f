// verdict-core/src/domain/snapshot.rs

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

use super::catalog::Component;
use super::error::DomainError;
use super::rules::Rule;

/// Upper bounds on what one customizer configuration may carry.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case", default)]
pub struct SnapshotLimits {
    pub max_rules: usize,
    pub max_conditions_per_rule: usize,
    pub max_actions_per_rule: usize,
}

impl Default for SnapshotLimits {
    fn default() -> Self {
        Self {
            max_rules: 100,
            max_conditions_per_rule: 10,
            max_actions_per_rule: 10,
        }
    }
}

/// Full component + rule set, swapped into the engine as a whole.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Validate)]
pub struct Snapshot {
    #[validate(nested)]
    #[serde(default)]
    pub components: Vec<Component>,

    #[validate(nested)]
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Snapshot {
    pub fn new(components: Vec<Component>, rules: Vec<Rule>) -> Self {
        Self { components, rules }
    }

    pub fn option_count(&self) -> usize {
        self.components.iter().map(|c| c.options.len()).sum()
    }

    /// Structural checks run before a snapshot may replace the live one.
    pub fn check_integrity(&self, limits: &SnapshotLimits) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidField(e.to_string()))?;

        let mut component_ids = HashSet::new();
        for comp in &self.components {
            if !component_ids.insert(comp.id.as_str()) {
                return Err(DomainError::DuplicateComponent(comp.id.clone()));
            }
            if comp.min_selections > comp.max_selections {
                return Err(DomainError::InvalidCardinality {
                    component_id: comp.id.clone(),
                    min: comp.min_selections,
                    max: comp.max_selections,
                });
            }
            let mut option_ids = HashSet::new();
            for opt in &comp.options {
                if !option_ids.insert(opt.id.as_str()) {
                    return Err(DomainError::DuplicateOption {
                        component_id: comp.id.clone(),
                        option_id: opt.id.clone(),
                    });
                }
            }
        }

        check_limit("rules", self.rules.len(), limits.max_rules)?;

        let mut rule_ids = HashSet::new();
        for rule in &self.rules {
            if !rule_ids.insert(rule.id.as_str()) {
                return Err(DomainError::DuplicateRule(rule.id.clone()));
            }
            check_limit(
                &format!("conditions of rule '{}'", rule.id),
                rule.conditions.len(),
                limits.max_conditions_per_rule,
            )?;
            check_limit(
                &format!("actions of rule '{}'", rule.id),
                rule.actions.len(),
                limits.max_actions_per_rule,
            )?;
        }

        Ok(())
    }
}

fn check_limit(what: &str, actual: usize, limit: usize) -> Result<(), DomainError> {
    if actual > limit {
        return Err(DomainError::LimitExceeded {
            what: what.to_string(),
            actual,
            limit,
        });
    }
    Ok(())
}
