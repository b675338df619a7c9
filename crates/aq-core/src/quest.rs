//! Quests and the objective tracker.
//!
//! A quest is complete once every objective has been recorded. Completion
//! is latched: it happens once and the reward is granted once.

use serde::{Deserialize, Serialize};

use crate::id::{ItemId, QuestId};

/// Points at one objective of one quest. Attached to items, locations and
/// enemies as a gameplay hook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectiveRef {
    /// The quest the objective belongs to.
    pub quest: QuestId,
    /// The objective key within that quest.
    pub objective: String,
}

impl ObjectiveRef {
    /// Build a hook.
    pub fn new(quest: impl Into<QuestId>, objective: impl Into<String>) -> Self {
        Self {
            quest: quest.into(),
            objective: objective.into(),
        }
    }
}

/// A multi-objective quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    /// Catalog key.
    pub id: QuestId,
    /// Display name.
    pub name: String,
    /// What the player is asked to do.
    pub description: String,
    /// Objectives that must all be recorded.
    pub objectives: Vec<String>,
    /// Objectives recorded so far, in the order they happened.
    #[serde(default)]
    pub completed_objectives: Vec<String>,
    /// Item granted on completion.
    pub reward: ItemId,
    /// Latched once all objectives are met.
    #[serde(default)]
    pub completed: bool,
}

impl Quest {
    /// Create a fresh quest.
    pub fn new<I, T>(
        id: impl Into<QuestId>,
        name: impl Into<String>,
        description: impl Into<String>,
        objectives: I,
        reward: impl Into<ItemId>,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            objectives: objectives.into_iter().map(Into::into).collect(),
            completed_objectives: Vec::new(),
            reward: reward.into(),
            completed: false,
        }
    }

    /// Record an objective. Returns true only if it belongs to this quest
    /// and had not been recorded before.
    pub fn record_objective(&mut self, objective: &str) -> bool {
        if !self.objectives.iter().any(|o| o == objective) || self.is_recorded(objective) {
            return false;
        }
        self.completed_objectives.push(objective.to_string());
        true
    }

    /// Whether an objective has been recorded.
    pub fn is_recorded(&self, objective: &str) -> bool {
        self.completed_objectives.iter().any(|o| o == objective)
    }

    /// Latch completion if every objective is recorded. Returns true exactly
    /// once, on the call that completes the quest.
    pub fn check_completion(&mut self) -> bool {
        if self.completed {
            return false;
        }
        if self.objectives.iter().all(|o| self.is_recorded(o)) {
            self.completed = true;
            return true;
        }
        false
    }

    /// Recorded objectives over total objectives.
    pub fn progress(&self) -> (usize, usize) {
        (self.completed_objectives.len(), self.objectives.len())
    }
}

/// What happened when an objective hook fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestUpdate {
    /// Unknown quest, foreign objective, or already recorded.
    Unchanged,
    /// Objective recorded; the quest is still open.
    ObjectiveCompleted {
        /// Quest display name.
        quest: String,
        /// The objective key.
        objective: String,
    },
    /// Objective recorded and it finished the quest; the reward was granted.
    QuestCompleted {
        /// Quest display name.
        quest: String,
        /// The objective key.
        objective: String,
        /// The item added to the inventory.
        reward: ItemId,
    },
}

/// Turn an objective key like `clear_forest` into `Clear Forest`.
pub fn objective_title(objective: &str) -> String {
    objective
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
