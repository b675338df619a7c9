use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::ItemId;
use crate::quest::ObjectiveRef;

/// What an item does when carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Adds its value to attack damage when equipped.
    Weapon,
    /// Subtracts its value from incoming damage when equipped.
    Armor,
    /// Restores its value in health when used.
    Potion,
    /// Quest or gating item with no mechanical value.
    KeyItem,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
            Self::Potion => write!(f, "potion"),
            Self::KeyItem => write!(f, "key item"),
        }
    }
}

/// A catalog entry for an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Catalog key.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Flavor text shown by `look`.
    pub description: String,
    /// Item category.
    pub kind: ItemKind,
    /// Damage, reduction, or heal amount depending on `kind`.
    pub value: i32,
    /// Quest objective recorded when the item is picked up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<ObjectiveRef>,
}

impl Item {
    /// Create an item without a quest hook.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ItemKind,
        value: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind,
            value,
            objective: None,
        }
    }

    /// Attach a pickup objective.
    pub fn with_objective(mut self, objective: ObjectiveRef) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Whether the item can go into the weapon or armor slot.
    pub fn is_equippable(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon | ItemKind::Armor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equippable_kinds() {
        let sword = Item::new("sword", "Sword", "", ItemKind::Weapon, 5);
        let mail = Item::new("mail", "Mail", "", ItemKind::Armor, 5);
        let potion = Item::new("potion", "Potion", "", ItemKind::Potion, 25);
        let key = Item::new("key", "Key", "", ItemKind::KeyItem, 0);
        assert!(sword.is_equippable());
        assert!(mail.is_equippable());
        assert!(!potion.is_equippable());
        assert!(!key.is_equippable());
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ItemKind::KeyItem).unwrap(),
            "\"key_item\""
        );
    }
}
