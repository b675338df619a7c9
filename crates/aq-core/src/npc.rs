use serde::{Deserialize, Serialize};

use crate::id::{ItemId, NpcId, QuestId};

/// Lines a character speaks, keyed by where the player stands with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dialogue {
    /// Always spoken first.
    pub greeting: String,
    /// Offer made while the quest is not yet taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest: Option<String>,
    /// Reminder while the quest is underway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_active: Option<String>,
    /// Thanks once the quest is done.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_complete: Option<String>,
}

impl Dialogue {
    /// Dialogue with only a greeting.
    pub fn greeting(text: impl Into<String>) -> Self {
        Self {
            greeting: text.into(),
            ..Self::default()
        }
    }
}

/// An item a character offers for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// The item handed over.
    pub give: ItemId,
    /// Price in gold.
    pub cost: u32,
}

/// A non-player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    /// Catalog key.
    pub id: NpcId,
    /// Display name.
    pub name: String,
    /// Text shown by `look`.
    pub description: String,
    /// Spoken lines.
    pub dialogue: Dialogue,
    /// Wares on offer (listed only).
    #[serde(default)]
    pub trades: Vec<Trade>,
    /// Quest this character hands out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest: Option<QuestId>,
}

impl Npc {
    /// Create a character with dialogue and nothing else.
    pub fn new(
        id: impl Into<NpcId>,
        name: impl Into<String>,
        description: impl Into<String>,
        dialogue: Dialogue,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            dialogue,
            trades: Vec::new(),
            quest: None,
        }
    }

    /// Add a trade offer.
    pub fn sells(mut self, give: impl Into<ItemId>, cost: u32) -> Self {
        self.trades.push(Trade {
            give: give.into(),
            cost,
        });
        self
    }

    /// Attach a quest.
    pub fn gives_quest(mut self, quest: impl Into<QuestId>) -> Self {
        self.quest = Some(quest.into());
        self
    }
}
