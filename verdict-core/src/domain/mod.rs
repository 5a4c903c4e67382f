pub mod catalog;
pub mod error;
pub mod rules;
pub mod selection;
pub mod snapshot;
pub mod verdict;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use catalog::{Component, ComponentOption, ComponentType, SelectionMode};
pub use error::DomainError;
pub use rules::{ActionType, Condition, Operator, Predicate, Rule, RuleAction, RuleType};
pub use selection::{Selection, SelectionState};
pub use snapshot::{Snapshot, SnapshotLimits};
pub use verdict::{IssueCode, ValidationIssue, ValidationResult};

pub(crate) fn default_true() -> bool {
    true
}
