use serde::{Deserialize, Serialize};

use crate::id::{EnemyId, ItemId, LocationId, NpcId};
use crate::quest::ObjectiveRef;

/// A place the player can stand in.
///
/// `enemies` and `items` are live lists: they shrink as enemies are defeated
/// and items are picked up. Connections are directed; an edge from A to B
/// says nothing about B to A.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// World map key.
    pub id: LocationId,
    /// Display name.
    pub name: String,
    /// Text narrated on arrival and by `look`.
    pub description: String,
    /// Outgoing edges, in the order they are matched and listed.
    #[serde(default)]
    pub connections: Vec<LocationId>,
    /// Enemies currently present.
    #[serde(default)]
    pub enemies: Vec<EnemyId>,
    /// Characters present.
    #[serde(default)]
    pub npcs: Vec<NpcId>,
    /// Items lying on the ground.
    #[serde(default)]
    pub items: Vec<ItemId>,
    /// Item the player must carry to enter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_item: Option<ItemId>,
    /// Quest objective recorded on arrival.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<ObjectiveRef>,
    /// Item the player must carry for the arrival objective to count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective_item: Option<ItemId>,
}

impl Location {
    /// Create an empty location.
    pub fn new(
        id: impl Into<LocationId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            connections: Vec::new(),
            enemies: Vec::new(),
            npcs: Vec::new(),
            items: Vec::new(),
            requires_item: None,
            objective: None,
            objective_item: None,
        }
    }

    /// Add outgoing connections.
    pub fn connect<I, T>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<LocationId>,
    {
        self.connections.extend(targets.into_iter().map(Into::into));
        self
    }

    /// Place enemies.
    pub fn with_enemies<I, T>(mut self, enemies: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<EnemyId>,
    {
        self.enemies.extend(enemies.into_iter().map(Into::into));
        self
    }

    /// Place characters.
    pub fn with_npcs<I, T>(mut self, npcs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NpcId>,
    {
        self.npcs.extend(npcs.into_iter().map(Into::into));
        self
    }

    /// Place items on the ground.
    pub fn with_items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemId>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Gate entry behind an item.
    pub fn locked_by(mut self, item: impl Into<ItemId>) -> Self {
        self.requires_item = Some(item.into());
        self
    }

    /// Attach an arrival objective.
    pub fn with_objective(mut self, objective: ObjectiveRef) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Attach an arrival objective that only counts while `item` is
    /// carried.
    pub fn with_delivery(mut self, objective: ObjectiveRef, item: impl Into<ItemId>) -> Self {
        self.objective = Some(objective);
        self.objective_item = Some(item.into());
        self
    }

    /// The arrival objective, if it counts for an inventory holding
    /// `carried`.
    pub fn arrival_objective(&self, carried: &[ItemId]) -> Option<&ObjectiveRef> {
        let delivered = self
            .objective_item
            .as_ref()
            .is_none_or(|item| carried.contains(item));
        self.objective.as_ref().filter(|_| delivered)
    }

    /// Remove the first occurrence of an item from the ground.
    pub fn remove_item(&mut self, item: &ItemId) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove the first occurrence of an enemy from the live list.
    pub fn remove_enemy(&mut self, enemy: &EnemyId) -> bool {
        match self.enemies.iter().position(|e| e == enemy) {
            Some(pos) => {
                self.enemies.remove(pos);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_order() {
        let loc = Location::new("village", "Village", "Quiet.")
            .connect(["forest", "inn"])
            .with_items(["map", "map"]);
        assert_eq!(loc.connections[0].as_str(), "forest");
        assert_eq!(loc.connections[1].as_str(), "inn");
        assert_eq!(loc.items.len(), 2);
    }

    #[test]
    fn remove_item_takes_one_copy() {
        let mut loc = Location::new("a", "A", "").with_items(["coin", "coin"]);
        assert!(loc.remove_item(&ItemId::new("coin")));
        assert_eq!(loc.items.len(), 1);
        assert!(loc.remove_item(&ItemId::new("coin")));
        assert!(!loc.remove_item(&ItemId::new("coin")));
    }

    #[test]
    fn remove_enemy() {
        let mut loc = Location::new("a", "A", "").with_enemies(["wolf"]);
        assert!(loc.remove_enemy(&EnemyId::new("wolf")));
        assert!(loc.enemies.is_empty());
        assert!(!loc.remove_enemy(&EnemyId::new("wolf")));
    }

    #[test]
    fn delivery_objective_needs_the_item() {
        let hook = ObjectiveRef::new("q", "deliver_gem");
        let loc = Location::new("a", "A", "").with_delivery(hook.clone(), "gem");
        assert_eq!(loc.arrival_objective(&[]), None);
        assert_eq!(loc.arrival_objective(&[ItemId::new("coin")]), None);
        assert_eq!(loc.arrival_objective(&[ItemId::new("gem")]), Some(&hook));

        let plain = Location::new("b", "B", "").with_objective(hook.clone());
        assert_eq!(plain.arrival_objective(&[]), Some(&hook));
    }
}
