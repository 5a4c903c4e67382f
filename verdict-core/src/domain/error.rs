// verdict-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq)]
pub enum DomainError {
    #[error("Duplicate component id '{0}' in snapshot")]
    #[diagnostic(
        code(verdict::domain::duplicate_component),
        help("Component ids must be unique within one configuration.")
    )]
    DuplicateComponent(String),

    #[error("Duplicate option id '{option_id}' in component '{component_id}'")]
    #[diagnostic(code(verdict::domain::duplicate_option))]
    DuplicateOption {
        component_id: String,
        option_id: String,
    },

    #[error("Duplicate rule id '{0}' in snapshot")]
    #[diagnostic(code(verdict::domain::duplicate_rule))]
    DuplicateRule(String),

    #[error("Component '{component_id}' has minSelections ({min}) greater than maxSelections ({max})")]
    #[diagnostic(
        code(verdict::domain::cardinality),
        help("Lower minSelections or raise maxSelections in the customizer configuration.")
    )]
    InvalidCardinality {
        component_id: String,
        min: u32,
        max: u32,
    },

    #[error("Snapshot limit exceeded for {what}: {actual} > {limit}")]
    #[diagnostic(code(verdict::domain::limit))]
    LimitExceeded {
        what: String,
        actual: usize,
        limit: usize,
    },

    #[error("Invalid condition on component '{component_id}' ({operator}): {reason}")]
    #[diagnostic(
        code(verdict::domain::condition),
        help("Check the value shape expected by the operator (text, list or number).")
    )]
    InvalidCondition {
        component_id: String,
        operator: String,
        reason: String,
    },

    #[error("Invalid {action} action: {reason}")]
    #[diagnostic(
        code(verdict::domain::action),
        help("Messages go in `value`; component actions need `componentId` (and `optionId` for option actions).")
    )]
    InvalidAction { action: String, reason: String },

    #[error("Invalid field: {0}")]
    #[diagnostic(code(verdict::domain::field))]
    InvalidField(String),
}
