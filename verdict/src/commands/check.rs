// verdict/src/commands/check.rs
//
// USE CASE: Pre-flight integrity check of a configuration snapshot.

use std::path::PathBuf;

use verdict_core::domain::SelectionMode;

use super::load_engine;

pub fn execute(snapshot: PathBuf, config_dir: PathBuf) -> anyhow::Result<()> {
    println!("🩺 Checking snapshot {}...", snapshot.display());

    let engine = load_engine(&snapshot, &config_dir)?;

    let components = engine.components();
    let options: usize = components.iter().map(|c| c.options.len()).sum();
    let multiple = components
        .iter()
        .filter(|c| c.selection_mode == SelectionMode::Multiple)
        .count();
    let inactive = components.iter().filter(|c| !c.is_active()).count();
    let enabled_rules = engine.rules().iter().filter(|r| r.is_enabled).count();

    println!(
        "   Components: {} ({} multiple, {} hidden or disabled)",
        components.len(),
        multiple,
        inactive
    );
    println!("   Options: {}", options);
    println!(
        "   Rules: {} ({} enabled, limit {})",
        engine.rules().len(),
        enabled_rules,
        engine.limits().max_rules
    );
    println!("✅ Snapshot is sound.");

    Ok(())
}
