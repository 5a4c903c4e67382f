// verdict-core/src/application/evaluator.rs

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::domain::rules::{Condition, Predicate, Rule, RuleAction};
use crate::domain::selection::{Selection, SelectionState};
use crate::domain::verdict::{IssueCode, ValidationIssue};

/// Everything the rules that fired during one evaluation produced.
///
/// Component and option effects are applied in evaluation order, so a later
/// `ShowComponent` cancels an earlier `HideComponent` and a later
/// `SetDefault` replaces an earlier one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RuleOutcome {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    pub applied_rules: Vec<String>,
    pub hidden_components: BTreeSet<String>,
    pub disabled_options: BTreeMap<String, BTreeSet<String>>,
    pub required_options: BTreeMap<String, String>,
}

/// Stateless evaluator for rule conditions and actions.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleEvaluator;

impl RuleEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate_condition(&self, condition: &Condition, selections: &SelectionState) -> bool {
        let selection = selections.get(&condition.component_id);

        match &condition.predicate {
            Predicate::Eq(value) | Predicate::Contains(value) => contains(selection, value),
            Predicate::Neq(value) => !contains(selection, value),
            Predicate::In(values) => any_of(selection, values),
            Predicate::NotIn(values) => !any_of(selection, values),
            Predicate::IsSelected => selection.is_some_and(|s| !s.is_empty()),
            Predicate::IsNotSelected => selection.is_none_or(Selection::is_empty),
            Predicate::Gt(n) => number(selection).is_some_and(|v| v > *n),
            Predicate::Gte(n) => number(selection).is_some_and(|v| v >= *n),
            Predicate::Lt(n) => number(selection).is_some_and(|v| v < *n),
            Predicate::Lte(n) => number(selection).is_some_and(|v| v <= *n),
        }
    }

    /// Conjunction; an empty list holds.
    pub fn evaluate_conditions(&self, conditions: &[Condition], selections: &SelectionState) -> bool {
        conditions
            .iter()
            .all(|c| self.evaluate_condition(c, selections))
    }

    /// Runs `rules` in the given order, skipping disabled ones.
    pub fn evaluate_rules(&self, rules: &[Rule], selections: &SelectionState) -> RuleOutcome {
        let mut outcome = RuleOutcome::default();

        for rule in rules.iter().filter(|r| r.is_enabled) {
            if !self.evaluate_conditions(&rule.conditions, selections) {
                continue;
            }

            debug!(rule = %rule.id, priority = rule.priority, "Rule fired");
            outcome.applied_rules.push(rule.id.clone());

            for action in &rule.actions {
                match action {
                    RuleAction::ShowError(msg) => outcome.errors.push(ValidationIssue::for_rule(
                        IssueCode::RuleError,
                        &rule.id,
                        msg.as_str(),
                    )),
                    RuleAction::ShowWarning(msg) => {
                        outcome.warnings.push(ValidationIssue::for_rule(
                            IssueCode::RuleWarning,
                            &rule.id,
                            msg.as_str(),
                        ))
                    }
                    RuleAction::HideComponent(id) => {
                        outcome.hidden_components.insert(id.clone());
                    }
                    RuleAction::ShowComponent(id) => {
                        outcome.hidden_components.remove(id);
                    }
                    RuleAction::DisableOption {
                        component_id,
                        option_id,
                    } => {
                        outcome
                            .disabled_options
                            .entry(component_id.clone())
                            .or_default()
                            .insert(option_id.clone());
                    }
                    RuleAction::SetDefault {
                        component_id,
                        option_id,
                    } => {
                        outcome
                            .required_options
                            .insert(component_id.clone(), option_id.clone());
                    }
                }
            }

            if rule.stop_processing {
                debug!(rule = %rule.id, "Rule evaluation stopped");
                break;
            }
        }

        outcome
    }
}

fn contains(selection: Option<&Selection>, value: &str) -> bool {
    selection.is_some_and(|s| s.contains(value))
}

fn any_of(selection: Option<&Selection>, values: &[String]) -> bool {
    selection.is_some_and(|s| s.option_ids().any(|id| values.iter().any(|v| v == id)))
}

fn number(selection: Option<&Selection>) -> Option<f64> {
    selection.and_then(Selection::as_number)
}
