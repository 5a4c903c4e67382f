// verdict-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;

pub use config::{EngineSettings, load_selections, load_settings, load_snapshot};
