//! Referential checks across a world.
//!
//! The interpreter treats a dangling location reference as a fatal error for
//! the command, so worlds loaded from disk are checked up front.

use crate::id::ItemId;
use crate::quest::ObjectiveRef;
use crate::world::WorldModel;

/// A warning or error found during world validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// What the issue is about, e.g. `location 'village'`.
    pub subject: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Validate every cross reference in the world.
///
/// Missing locations are errors, since they break movement. Missing catalog
/// entries for items are warnings: such items still work as loose
/// identifiers.
pub fn validate_world(world: &WorldModel) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if world.location(&world.start.location).is_none() {
        issues.push(error(
            "start",
            format!("start location '{}' does not exist", world.start.location),
        ));
    }
    for item in &world.start.inventory {
        check_item(world, "start", item, &mut issues);
    }
    for slot in [&world.start.weapon, &world.start.armor].into_iter().flatten() {
        if !world.start.inventory.contains(slot) {
            issues.push(error(
                "start",
                format!("equipped item '{slot}' is not in the starting inventory"),
            ));
        }
    }

    for (id, location) in &world.locations {
        let subject = format!("location '{id}'");
        check_key(&subject, id, &location.id, &mut issues);
        for target in &location.connections {
            if world.location(target).is_none() {
                issues.push(error(&subject, format!("connection to unknown location '{target}'")));
            }
        }
        for enemy in &location.enemies {
            if world.enemy(enemy).is_none() {
                issues.push(error(&subject, format!("unknown enemy '{enemy}'")));
            }
        }
        for npc in &location.npcs {
            if world.npc(npc).is_none() {
                issues.push(error(&subject, format!("unknown character '{npc}'")));
            }
        }
        for item in &location.items {
            check_item(world, &subject, item, &mut issues);
        }
        if let Some(key) = &location.requires_item {
            check_item(world, &subject, key, &mut issues);
        }
        if let Some(hook) = &location.objective {
            check_objective(world, &subject, hook, &mut issues);
        }
        if let Some(item) = &location.objective_item {
            check_item(world, &subject, item, &mut issues);
        }
    }

    for (id, item) in &world.items {
        let subject = format!("item '{id}'");
        check_key(&subject, id, &item.id, &mut issues);
        if let Some(hook) = &item.objective {
            check_objective(world, &subject, hook, &mut issues);
        }
    }

    for (id, npc) in &world.npcs {
        let subject = format!("character '{id}'");
        check_key(&subject, id, &npc.id, &mut issues);
        for trade in &npc.trades {
            if world.item(&trade.give).is_none() {
                issues.push(error(&subject, format!("trades unknown item '{}'", trade.give)));
            }
        }
        if let Some(quest) = &npc.quest {
            if !world.quests.contains_key(quest) {
                issues.push(error(&subject, format!("offers unknown quest '{quest}'")));
            }
        }
    }

    for (id, enemy) in &world.enemies {
        let subject = format!("enemy '{id}'");
        check_key(&subject, id, &enemy.id, &mut issues);
        if enemy.max_health <= 0 {
            issues.push(error(&subject, "max_health must be positive".to_string()));
        }
        for item in &enemy.loot {
            check_item(world, &subject, item, &mut issues);
        }
        if let Some(hook) = &enemy.objective {
            check_objective(world, &subject, hook, &mut issues);
        }
    }

    for (id, quest) in &world.quests {
        let subject = format!("quest '{id}'");
        check_key(&subject, id, &quest.id, &mut issues);
        if quest.objectives.is_empty() {
            issues.push(warning(&subject, "has no objectives".to_string()));
        }
        check_item(world, &subject, &quest.reward, &mut issues);
    }

    if let Some(victory) = &world.victory {
        match world.location(&victory.location) {
            None => issues.push(error(
                "victory",
                format!("unknown location '{}'", victory.location),
            )),
            Some(loc) if !loc.enemies.contains(&victory.enemy) => issues.push(warning(
                "victory",
                format!("'{}' is not placed in '{}'", victory.enemy, victory.location),
            )),
            Some(_) => {}
        }
    }

    issues
}

/// Catalog entries are looked up by key but narrated and removed by id, so
/// the two must agree.
fn check_key<K: PartialEq + std::fmt::Display>(
    subject: &str,
    key: &K,
    id: &K,
    issues: &mut Vec<ValidationIssue>,
) {
    if key != id {
        issues.push(error(subject, format!("keyed under a different id '{id}'")));
    }
}

fn check_item(world: &WorldModel, subject: &str, item: &ItemId, issues: &mut Vec<ValidationIssue>) {
    if world.item(item).is_none() {
        issues.push(warning(subject, format!("item '{item}' has no catalog entry")));
    }
}

fn check_objective(
    world: &WorldModel,
    subject: &str,
    hook: &ObjectiveRef,
    issues: &mut Vec<ValidationIssue>,
) {
    match world.quests.get(&hook.quest) {
        None => issues.push(error(subject, format!("hook names unknown quest '{}'", hook.quest))),
        Some(q) if !q.objectives.contains(&hook.objective) => issues.push(error(
            subject,
            format!("quest '{}' has no objective '{}'", hook.quest, hook.objective),
        )),
        Some(_) => {}
    }
}

fn error(subject: &str, message: String) -> ValidationIssue {
    ValidationIssue {
        subject: subject.to_string(),
        message,
        is_error: true,
    }
}

fn warning(subject: &str, message: String) -> ValidationIssue {
    ValidationIssue {
        subject: subject.to_string(),
        message,
        is_error: false,
    }
}
