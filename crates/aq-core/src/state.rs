//! The per-game aggregate root.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::id::{LocationId, QuestId};
use crate::player::PlayerState;
use crate::quest::{ObjectiveRef, Quest, QuestUpdate};
use crate::world::WorldModel;

/// Everything that belongs to one playthrough.
///
/// The world's location lists (`enemies`, `items`) are the only mutable
/// state kept outside this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The player character.
    pub player: PlayerState,
    /// Where the player stands. Always a key of the world map.
    pub current_location: LocationId,
    /// Locations the player has been to.
    pub visited_locations: BTreeSet<LocationId>,
    /// Live quest records, one per quest the world defines.
    pub quests: BTreeMap<QuestId, Quest>,
    /// Named story flags set by gameplay hooks.
    pub quest_progress: BTreeMap<String, bool>,
    /// In-game minutes elapsed.
    pub game_time: u32,
    /// Enemies beaten so far.
    pub enemies_defeated: u32,
}

impl GameState {
    /// Start a new game in `world`: starting kit applied, every quest of the
    /// world attached in its initial state.
    pub fn new_game(world: &WorldModel, player_name: impl Into<String>) -> Self {
        let kit = &world.start;
        let mut player = PlayerState::new(player_name, kit.max_health);
        player.inventory = kit.inventory.clone();
        player.equipped_weapon = kit.weapon.clone();
        player.equipped_armor = kit.armor.clone();

        let quests = world
            .quests
            .iter()
            .map(|(id, q)| {
                let mut fresh = q.clone();
                fresh.completed_objectives.clear();
                fresh.completed = false;
                (id.clone(), fresh)
            })
            .collect();

        let quest_progress = world
            .enemies
            .values()
            .filter_map(|e| e.progress_flag.clone())
            .map(|flag| (flag, false))
            .collect();

        Self {
            player,
            current_location: kit.location.clone(),
            visited_locations: BTreeSet::new(),
            quests,
            quest_progress,
            game_time: 0,
            enemies_defeated: 0,
        }
    }

    /// Advance the clock.
    pub fn advance_time(&mut self, minutes: u32) {
        self.game_time = self.game_time.saturating_add(minutes);
    }

    /// Mark a location visited. Returns true on the first visit.
    pub fn visit(&mut self, location: &LocationId) -> bool {
        self.visited_locations.insert(location.clone())
    }

    /// Set a story flag.
    pub fn set_flag(&mut self, flag: impl Into<String>) {
        self.quest_progress.insert(flag.into(), true);
    }

    /// Read a story flag; unset flags are false.
    pub fn flag(&self, flag: &str) -> bool {
        self.quest_progress.get(flag).copied().unwrap_or(false)
    }

    /// Record an objective, latch quest completion, and grant the reward the
    /// one time the quest completes.
    pub fn advance_objective(&mut self, hook: &ObjectiveRef) -> QuestUpdate {
        let Some(quest) = self.quests.get_mut(&hook.quest) else {
            return QuestUpdate::Unchanged;
        };
        if !quest.record_objective(&hook.objective) {
            return QuestUpdate::Unchanged;
        }
        if quest.check_completion() {
            let reward = quest.reward.clone();
            let name = quest.name.clone();
            self.player.add_item(reward.clone());
            QuestUpdate::QuestCompleted {
                quest: name,
                objective: hook.objective.clone(),
                reward,
            }
        } else {
            QuestUpdate::ObjectiveCompleted {
                quest: quest.name.clone(),
                objective: hook.objective.clone(),
            }
        }
    }

    /// Whether a quest exists and is completed.
    pub fn quest_completed(&self, quest: &QuestId) -> bool {
        self.quests.get(quest).is_some_and(|q| q.completed)
    }

    /// In-game clock as `"{h}h {m}m"`.
    pub fn clock(&self) -> String {
        format!("{}h {}m", self.game_time / 60, self.game_time % 60)
    }
}
