use std::path::Path;

use aq_core::preset;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let world = preset::oakvale();
    let content = world
        .to_json()
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, format!("{content}\n"))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
