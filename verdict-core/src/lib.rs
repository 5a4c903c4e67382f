// verdict-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Domain
// Components, options, rules, selections and the verdict.
// Depends on nothing else in the crate.
pub mod domain;

// 2. Application (Use Cases)
// The validation engine: built-in checks + rule evaluation.
pub mod application;

// 3. Infrastructure (Adapters)
// Snapshot / selection file loading and engine settings.
pub mod infrastructure;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::{RuleEvaluator, ValidationEngine};
pub use domain::{
    Component, ComponentOption, Condition, IssueCode, Predicate, Rule, RuleAction, Selection,
    SelectionState, Snapshot, SnapshotLimits, ValidationIssue, ValidationResult,
};
pub use error::VerdictError;
