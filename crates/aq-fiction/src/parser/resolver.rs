//! Target resolution against the things a command can act on.
//!
//! Matching is a case-insensitive substring test against each candidate's
//! id or display name. The first candidate in list order wins, so an empty
//! target picks the first candidate.

use aq_core::{EnemyId, ItemId, LocationId, NpcId, WorldModel};

/// Whether `target` (already lower-case) names a candidate with this id and
/// display name.
pub fn matches(target: &str, id: &str, name: &str) -> bool {
    id.to_lowercase().contains(target) || name.to_lowercase().contains(target)
}

/// First item in `items` that `target` names. Items missing from the
/// catalog match on their id alone.
pub fn resolve_item<'a>(world: &WorldModel, items: &'a [ItemId], target: &str) -> Option<&'a ItemId> {
    items.iter().find(|id| {
        let name = world.item(id).map_or("", |i| i.name.as_str());
        matches(target, id.as_str(), name)
    })
}

/// First character in `npcs` that `target` names.
pub fn resolve_npc<'a>(world: &WorldModel, npcs: &'a [NpcId], target: &str) -> Option<&'a NpcId> {
    npcs.iter().find(|id| {
        let name = world.npc(id).map_or("", |n| n.name.as_str());
        matches(target, id.as_str(), name)
    })
}

/// First enemy in `enemies` that `target` names.
pub fn resolve_enemy<'a>(
    world: &WorldModel,
    enemies: &'a [EnemyId],
    target: &str,
) -> Option<&'a EnemyId> {
    enemies.iter().find(|id| {
        let name = world.enemy(id).map_or("", |e| e.name.as_str());
        matches(target, id.as_str(), name)
    })
}

/// First connection in `exits` that `target` names, by id or by the
/// destination's name.
pub fn resolve_exit<'a>(
    world: &WorldModel,
    exits: &'a [LocationId],
    target: &str,
) -> Option<&'a LocationId> {
    exits.iter().find(|id| {
        let name = world.location(id).map_or("", |l| l.name.as_str());
        matches(target, id.as_str(), name)
    })
}
