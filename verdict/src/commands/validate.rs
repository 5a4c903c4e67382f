// verdict/src/commands/validate.rs
//
// USE CASE: Validate a selection state against a configuration snapshot.

use anyhow::Context;
use comfy_table::{Cell, Color, Table, presets::UTF8_FULL};
use std::path::PathBuf;

use verdict_core::ValidationResult;
use verdict_core::infrastructure::load_selections;

use super::load_engine;
use crate::cli::OutputFormat;

pub fn execute(
    snapshot: PathBuf,
    selections: PathBuf,
    format: OutputFormat,
    config_dir: PathBuf,
) -> anyhow::Result<()> {
    let engine = load_engine(&snapshot, &config_dir)?;
    let selections = load_selections(&selections)
        .with_context(|| format!("Failed to load selections {:?}", selections))?;

    let result = engine.validate(&selections);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&result)?),
        OutputFormat::Table => print_table(&result),
    }

    if !result.valid {
        // Exit with error code so checkout scripts / CI can gate on it
        std::process::exit(1);
    }

    Ok(())
}

fn print_table(result: &ValidationResult) {
    print_rule_effects(result);

    if result.errors.is_empty() && result.warnings.is_empty() {
        println!("✨ VALID. No issues found.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Severity", "Code", "Component", "Rule", "Message"]);

    let rows = result
        .errors
        .iter()
        .map(|i| ("error", Color::Red, i))
        .chain(result.warnings.iter().map(|i| ("warning", Color::Yellow, i)));

    for (severity, color, issue) in rows {
        table.add_row(vec![
            Cell::new(severity).fg(color),
            Cell::new(issue.code),
            Cell::new(issue.component_id.as_deref().unwrap_or("-")),
            Cell::new(issue.rule_id.as_deref().unwrap_or("-")),
            Cell::new(&issue.message),
        ]);
    }

    println!("{table}");

    if result.valid {
        println!(
            "✨ VALID with {} warning(s).",
            result.warnings.len()
        );
    } else {
        eprintln!(
            "❌ INVALID. {} error(s), {} warning(s).",
            result.errors.len(),
            result.warnings.len()
        );
    }
}

fn print_rule_effects(result: &ValidationResult) {
    if !result.hidden_components.is_empty() {
        let hidden: Vec<&str> = result.hidden_components.iter().map(String::as_str).collect();
        println!("Hidden by rules: {}", hidden.join(", "));
    }
    for (component, options) in &result.disabled_options {
        let options: Vec<&str> = options.iter().map(String::as_str).collect();
        println!("Disabled in {}: {}", component, options.join(", "));
    }
    for (component, option) in &result.required_options {
        println!("Default for {}: {}", component, option);
    }
}
