// verdict-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("Could not read '{path}': {source}")]
    #[diagnostic(
        code(verdict::infra::read),
        help("Check file permissions or path validity.")
    )]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // --- PARSING ---
    #[error("YAML Parsing Error in '{path}': {source}")]
    #[diagnostic(
        code(verdict::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("JSON Parsing Error in '{path}': {source}")]
    #[diagnostic(code(verdict::infra::json))]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported file format for '{0}'")]
    #[diagnostic(
        code(verdict::infra::format),
        help("Use a .yaml, .yml or .json file.")
    )]
    UnsupportedFormat(String),

    // --- CONFIG ---
    #[error("Configuration Error: {0}")]
    #[diagnostic(code(verdict::infra::config))]
    ConfigError(String),
}
