use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use aq_core::validate_world;

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(path)?;
    let issues = validate_world(&world);

    if issues.is_empty() {
        println!("  All checks passed for '{}'.", world.name);
        println!(
            "  {} locations, {} items, {} characters, {} enemies, {} quests",
            world.locations.len(),
            world.items.len(),
            world.npcs.len(),
            world.enemies.len(),
            world.quests.len()
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Level", "Subject", "Problem"]);
    for issue in &issues {
        let level = if issue.is_error { "error" } else { "warning" };
        table.add_row(vec![level, issue.subject.as_str(), issue.message.as_str()]);
    }
    println!("{table}");
    println!();

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    if errors > 0 {
        return Err(format!(
            "'{}' has {errors} error{} and {warnings} warning{}",
            world.name,
            if errors == 1 { "" } else { "s" },
            if warnings == 1 { "" } else { "s" },
        ));
    }

    println!(
        "  {} with {warnings} warning{}",
        "Passed".green(),
        if warnings == 1 { "" } else { "s" }
    );
    Ok(())
}
