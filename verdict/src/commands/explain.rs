// verdict/src/commands/explain.rs
//
// USE CASE: Show the order in which rules are evaluated.

use comfy_table::{Table, presets::UTF8_FULL};
use std::path::PathBuf;

use super::load_engine;

pub fn execute(snapshot: PathBuf, config_dir: PathBuf) -> anyhow::Result<()> {
    let engine = load_engine(&snapshot, &config_dir)?;

    if engine.rules().is_empty() {
        println!("No rules in snapshot.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#", "Rule", "Priority", "Enabled", "Stops", "Conditions", "Actions",
    ]);

    for (idx, rule) in engine.rules().iter().enumerate() {
        let conditions = rule
            .conditions
            .iter()
            .map(|c| format!("{} {}", c.component_id, c.operator()))
            .collect::<Vec<_>>()
            .join(" AND ");
        let actions = rule
            .actions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![
            (idx + 1).to_string(),
            rule.id.clone(),
            rule.priority.to_string(),
            if rule.is_enabled { "yes" } else { "no" }.to_string(),
            if rule.stop_processing { "yes" } else { "no" }.to_string(),
            if conditions.is_empty() { "(always)".to_string() } else { conditions },
            actions,
        ]);
    }

    println!("{table}");
    Ok(())
}
