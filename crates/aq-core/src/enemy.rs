use serde::{Deserialize, Serialize};

use crate::id::{EnemyId, ItemId};
use crate::quest::ObjectiveRef;

/// The shared definition of an enemy.
///
/// Templates are never damaged; each fight works on an [`EnemyInstance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    /// Catalog key.
    pub id: EnemyId,
    /// Display name.
    pub name: String,
    /// Text shown by `look`.
    pub description: String,
    /// Health at the start of every encounter.
    pub max_health: i32,
    /// Damage before variance and armor.
    pub base_damage: i32,
    /// Items handed to the player on defeat.
    #[serde(default)]
    pub loot: Vec<ItemId>,
    /// Quest-progress flag set to true on defeat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_flag: Option<String>,
    /// Quest objective recorded on defeat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<ObjectiveRef>,
}

impl EnemyTemplate {
    /// Create a template without loot or hooks.
    pub fn new(
        id: impl Into<EnemyId>,
        name: impl Into<String>,
        description: impl Into<String>,
        max_health: i32,
        base_damage: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            max_health,
            base_damage,
            loot: Vec::new(),
            progress_flag: None,
            objective: None,
        }
    }

    /// Set the loot table.
    pub fn with_loot<I, T>(mut self, loot: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemId>,
    {
        self.loot = loot.into_iter().map(Into::into).collect();
        self
    }

    /// Flip a quest-progress flag when this enemy falls.
    pub fn flags_on_defeat(mut self, flag: impl Into<String>) -> Self {
        self.progress_flag = Some(flag.into());
        self
    }

    /// Record a quest objective when this enemy falls.
    pub fn with_objective(mut self, objective: ObjectiveRef) -> Self {
        self.objective = Some(objective);
        self
    }

    /// A fresh, full-health copy for one encounter.
    pub fn spawn(&self) -> EnemyInstance {
        EnemyInstance {
            id: self.id.clone(),
            name: self.name.clone(),
            health: self.max_health,
            max_health: self.max_health,
            base_damage: self.base_damage,
            loot: self.loot.clone(),
        }
    }
}

/// A per-encounter copy of an enemy template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyInstance {
    /// Template this instance was spawned from.
    pub id: EnemyId,
    /// Display name.
    pub name: String,
    /// Remaining health; may drop below zero on the killing blow.
    pub health: i32,
    /// Health at spawn.
    pub max_health: i32,
    /// Damage before variance and armor.
    pub base_damage: i32,
    /// Items dropped on defeat.
    pub loot: Vec<ItemId>,
}

impl EnemyInstance {
    /// Whether the enemy has been brought to zero health or below.
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_independent_of_template() {
        let wolf = EnemyTemplate::new("wolf", "Wolf", "Gray.", 20, 8).with_loot(["health_potion"]);
        let mut first = wolf.spawn();
        first.health -= 15;
        let second = wolf.spawn();
        assert_eq!(second.health, 20);
        assert_eq!(wolf.max_health, 20);
        assert_eq!(second.loot, vec![ItemId::new("health_potion")]);
    }

    #[test]
    fn defeated_at_zero_or_below() {
        let mut wolf = EnemyTemplate::new("wolf", "Wolf", "", 5, 1).spawn();
        assert!(!wolf.is_defeated());
        wolf.health = 0;
        assert!(wolf.is_defeated());
        wolf.health = -3;
        assert!(wolf.is_defeated());
    }
}
