//! Player state management.

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// The player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Character name.
    pub name: String,
    /// Current health, kept within `0..=max_health`.
    pub health: i32,
    /// Health ceiling.
    pub max_health: i32,
    /// Carried items in pickup order. Duplicates are allowed.
    pub inventory: Vec<ItemId>,
    /// Weapon slot.
    pub equipped_weapon: Option<ItemId>,
    /// Armor slot.
    pub equipped_armor: Option<ItemId>,
}

impl PlayerState {
    /// Create a player at full health with nothing carried.
    pub fn new(name: impl Into<String>, max_health: i32) -> Self {
        let max_health = max_health.max(1);
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            inventory: Vec::new(),
            equipped_weapon: None,
            equipped_armor: None,
        }
    }

    /// Check if the player carries an item.
    pub fn has_item(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// Add an item to the end of the inventory.
    pub fn add_item(&mut self, item: ItemId) {
        self.inventory.push(item);
    }

    /// Remove the first copy of an item.
    pub fn remove_item(&mut self, item: &ItemId) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Restore health, never beyond `max_health`. Returns the new health.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.health = (self.health + amount.max(0)).min(self.max_health);
        self.health
    }

    /// Lose health, never below zero. Returns the new health.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount.max(0)).max(0);
        self.health
    }

    /// Whether health has run out.
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Current health as a fraction of the maximum (0.0 to 1.0).
    pub fn health_fraction(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (f64::from(self.health) / f64::from(self.max_health)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn player_state_new() {
        let p = PlayerState::new("Ada", 100);
        assert_eq!(p.health, 100);
        assert_eq!(p.max_health, 100);
        assert!(p.inventory.is_empty());
        assert!(p.equipped_weapon.is_none());
    }

    #[test]
    fn inventory_allows_duplicates() {
        let mut p = PlayerState::new("Ada", 100);
        let potion = ItemId::new("health_potion");
        p.add_item(potion.clone());
        p.add_item(potion.clone());
        assert_eq!(p.inventory.len(), 2);
        assert!(p.remove_item(&potion));
        assert!(p.has_item(&potion));
        assert!(p.remove_item(&potion));
        assert!(!p.has_item(&potion));
        assert!(!p.remove_item(&potion));
    }

    #[test]
    fn damage_saturates_at_zero() {
        let mut p = PlayerState::new("Ada", 10);
        assert_eq!(p.take_damage(25), 0);
        assert!(p.is_defeated());
    }

    #[test]
    fn health_fraction() {
        let mut p = PlayerState::new("Ada", 100);
        assert!((p.health_fraction() - 1.0).abs() < f64::EPSILON);
        p.take_damage(75);
        assert!((p.health_fraction() - 0.25).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn heal_never_exceeds_max(max in 1i32..500, start in 0i32..500, amount in 0i32..1000) {
            let mut p = PlayerState::new("Ada", max);
            p.health = start.min(max);
            let before = p.health;
            let after = p.heal(amount);
            prop_assert_eq!(after, (before + amount).min(max));
            prop_assert!(after <= p.max_health);
        }
    }
}
