use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enemy::EnemyTemplate;
use crate::error::{WorldError, WorldResult};
use crate::id::{EnemyId, ItemId, LocationId, NpcId, QuestId};
use crate::item::Item;
use crate::location::Location;
use crate::npc::Npc;
use crate::quest::Quest;

/// What a new character starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartingKit {
    /// Where the game begins.
    pub location: LocationId,
    /// Health ceiling of a new character.
    pub max_health: i32,
    /// Items carried from the start.
    #[serde(default)]
    pub inventory: Vec<ItemId>,
    /// Weapon equipped from the start; must also be in `inventory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<ItemId>,
    /// Armor equipped from the start; must also be in `inventory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<ItemId>,
}

/// The game is won by standing in `location` once `enemy` is gone from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryCondition {
    /// Where the final enemy waits.
    pub location: LocationId,
    /// The final enemy.
    pub enemy: EnemyId,
}

/// The world map and catalogs. Built once by a factory and passed by
/// reference into every operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldModel {
    /// World title.
    pub name: String,
    /// Starting conditions.
    pub start: StartingKit,
    /// Win condition, if the world has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victory: Option<VictoryCondition>,
    /// The world map.
    #[serde(default)]
    pub locations: BTreeMap<LocationId, Location>,
    /// Item catalog.
    #[serde(default)]
    pub items: BTreeMap<ItemId, Item>,
    /// Character catalog.
    #[serde(default)]
    pub npcs: BTreeMap<NpcId, Npc>,
    /// Enemy templates.
    #[serde(default)]
    pub enemies: BTreeMap<EnemyId, EnemyTemplate>,
    /// Quest definitions; copied into each new game.
    #[serde(default)]
    pub quests: BTreeMap<QuestId, Quest>,
}

impl WorldModel {
    /// Create an empty world that starts at `start_location`.
    pub fn new(name: impl Into<String>, start_location: impl Into<LocationId>) -> Self {
        Self {
            name: name.into(),
            start: StartingKit {
                location: start_location.into(),
                max_health: 100,
                inventory: Vec::new(),
                weapon: None,
                armor: None,
            },
            victory: None,
            locations: BTreeMap::new(),
            items: BTreeMap::new(),
            npcs: BTreeMap::new(),
            enemies: BTreeMap::new(),
            quests: BTreeMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Catalog registration
    // -----------------------------------------------------------------------

    /// Add or replace a location.
    pub fn add_location(&mut self, location: Location) {
        self.locations.insert(location.id.clone(), location);
    }

    /// Add or replace an item.
    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    /// Add or replace a character.
    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.insert(npc.id.clone(), npc);
    }

    /// Add or replace an enemy template.
    pub fn add_enemy(&mut self, enemy: EnemyTemplate) {
        self.enemies.insert(enemy.id.clone(), enemy);
    }

    /// Add or replace a quest definition.
    pub fn add_quest(&mut self, quest: Quest) {
        self.quests.insert(quest.id.clone(), quest);
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Get a location by id.
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Get a mutable location by id.
    pub fn location_mut(&mut self, id: &LocationId) -> Option<&mut Location> {
        self.locations.get_mut(id)
    }

    /// Get a location or fail with [`WorldError::LocationNotFound`].
    pub fn require_location(&self, id: &LocationId) -> WorldResult<&Location> {
        self.locations
            .get(id)
            .ok_or_else(|| WorldError::LocationNotFound(id.clone()))
    }

    /// Get a mutable location or fail with [`WorldError::LocationNotFound`].
    pub fn require_location_mut(&mut self, id: &LocationId) -> WorldResult<&mut Location> {
        self.locations
            .get_mut(id)
            .ok_or_else(|| WorldError::LocationNotFound(id.clone()))
    }

    /// Get an item by id.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Get a character by id.
    pub fn npc(&self, id: &NpcId) -> Option<&Npc> {
        self.npcs.get(id)
    }

    /// Get an enemy template by id.
    pub fn enemy(&self, id: &EnemyId) -> Option<&EnemyTemplate> {
        self.enemies.get(id)
    }

    /// Display name of an item, falling back to its spoken id for items
    /// without a catalog entry.
    pub fn item_name(&self, id: &ItemId) -> String {
        self.items
            .get(id)
            .map(|i| i.name.clone())
            .unwrap_or_else(|| id.spoken())
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Parse a world from JSON.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the world as pretty-printed JSON.
    pub fn to_json(&self) -> WorldResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
