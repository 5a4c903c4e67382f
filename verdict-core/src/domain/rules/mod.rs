// verdict-core/src/domain/rules/mod.rs

pub mod action;
pub mod condition;
pub mod rule;

pub use action::{ActionType, RuleAction};
pub use condition::{Condition, Operator, Predicate};
pub use rule::{Rule, RuleType};
