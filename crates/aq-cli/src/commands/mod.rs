pub mod check;
pub mod export;
pub mod play;

use std::path::Path;

use aq_core::{WorldModel, preset};

/// Load a world from a JSON file, or the built-in world when no path is
/// given.
fn load_world(path: Option<&Path>) -> Result<WorldModel, String> {
    let Some(path) = path else {
        return Ok(preset::oakvale());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let world = WorldModel::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), locations = world.locations.len(), "world loaded");
    Ok(world)
}
