// verdict-core/src/infrastructure/config/mod.rs

pub mod files;
pub mod settings;

pub use files::{load_selections, load_snapshot};
pub use settings::{EngineSettings, load_settings};
