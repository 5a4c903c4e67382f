// verdict-core/src/application/mod.rs

pub mod bootstrap;
mod checks;
pub mod engine;
pub mod evaluator;

// --- RE-EXPORTS (FACADE PATTERN) ---
pub use bootstrap::engine_from_files;
pub use engine::ValidationEngine;
pub use evaluator::{RuleEvaluator, RuleOutcome};
