// verdict-core/src/application/engine.rs

use std::cmp::Reverse;
use tracing::{debug, info, instrument, warn};

use super::checks::check_component;
use super::evaluator::RuleEvaluator;
use crate::domain::catalog::Component;
use crate::domain::error::DomainError;
use crate::domain::rules::Rule;
use crate::domain::selection::SelectionState;
use crate::domain::snapshot::{Snapshot, SnapshotLimits};
use crate::domain::verdict::ValidationResult;

/// Holds the live component/rule snapshot of one configurator and turns a
/// selection state into a verdict.
///
/// `validate` is pure and cheap enough to run on every selection change.
/// `update` swaps the snapshot wholesale; a rejected snapshot leaves the
/// previous one in place.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    components: Vec<Component>,
    // Kept in evaluation order: priority descending, snapshot order on ties.
    rules: Vec<Rule>,
    limits: SnapshotLimits,
    evaluator: RuleEvaluator,
}

impl ValidationEngine {
    pub fn new(components: Vec<Component>, rules: Vec<Rule>) -> Result<Self, DomainError> {
        Self::from_snapshot(Snapshot::new(components, rules), SnapshotLimits::default())
    }

    pub fn from_snapshot(snapshot: Snapshot, limits: SnapshotLimits) -> Result<Self, DomainError> {
        let mut engine = Self {
            limits,
            ..Self::default()
        };
        engine.load(snapshot)?;
        Ok(engine)
    }

    #[instrument(skip_all, fields(components = components.len(), rules = rules.len()))]
    pub fn update(&mut self, components: Vec<Component>, rules: Vec<Rule>) -> Result<(), DomainError> {
        self.load(Snapshot::new(components, rules))
    }

    fn load(&mut self, snapshot: Snapshot) -> Result<(), DomainError> {
        if let Err(e) = snapshot.check_integrity(&self.limits) {
            warn!(error = %e, "Rejected configuration snapshot");
            return Err(e);
        }

        let Snapshot { components, mut rules } = snapshot;
        rules.sort_by_key(|r| Reverse(r.priority));

        info!(
            components = components.len(),
            rules = rules.len(),
            "Configuration snapshot loaded"
        );
        self.components = components;
        self.rules = rules;
        Ok(())
    }

    pub fn validate(&self, selections: &SelectionState) -> ValidationResult {
        // 1. Declarative rules, in priority order. Their visibility effects
        // gate the built-in checks below.
        let outcome = self.evaluator.evaluate_rules(&self.rules, selections);

        // 2. Built-in checks, in snapshot order, skipping rule-hidden components
        let mut errors = Vec::new();
        for component in self
            .components
            .iter()
            .filter(|c| !outcome.hidden_components.contains(&c.id))
        {
            check_component(component, selections.get(&component.id), &mut errors);
        }
        errors.extend(outcome.errors);

        let result = ValidationResult {
            hidden_components: outcome.hidden_components,
            disabled_options: outcome.disabled_options,
            required_options: outcome.required_options,
            ..ValidationResult::new(errors, outcome.warnings, outcome.applied_rules)
        };
        debug!(
            valid = result.valid,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "Selections validated"
        );
        result
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn limits(&self) -> &SnapshotLimits {
        &self.limits
    }
}
