//! Configuration for an adventure session.

/// Configuration for an adventure session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible combat.
    pub seed: u64,
    /// Name of the player character.
    pub player_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_name: "Adventurer".to_string(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the player name. Blank names keep the current one.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            self.player_name = trimmed.to_string();
        }
        self
    }
}
