//! Status timers for both sides of a fight.
//!
//! Each timer counts the turns an effect has left. Bleeding and poison deal
//! damage at the start of every turn; strengthened and weakened modify
//! damage while they are above zero.

use serde::{Deserialize, Serialize};

use crate::dice::RandomSource;

/// Turns a freshly inflicted effect lasts.
pub const EFFECT_TURNS: u32 = 3;
/// Turns of strength granted by a good defense.
pub const STRENGTH_TURNS: u32 = 2;

/// Damage dealt by damage-over-time effects at the start of a turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickDamage {
    /// Bleeding damage (1–3), if bleeding.
    pub bleeding: Option<i32>,
    /// Poison damage (2–4), if poisoned.
    pub poison: Option<i32>,
}

impl TickDamage {
    /// Combined damage of this tick.
    pub fn total(&self) -> i32 {
        self.bleeding.unwrap_or(0) + self.poison.unwrap_or(0)
    }
}

/// Roll damage for active bleeding and poison, then count both timers down.
fn tick(bleeding: &mut u32, poisoned: &mut u32, rng: &mut dyn RandomSource) -> TickDamage {
    let mut out = TickDamage::default();
    if *bleeding > 0 {
        out.bleeding = Some(rng.roll(1, 3));
        *bleeding -= 1;
    }
    if *poisoned > 0 {
        out.poison = Some(rng.roll(2, 4));
        *poisoned -= 1;
    }
    out
}

fn describe(effects: &[(&str, u32)]) -> String {
    effects
        .iter()
        .filter(|(_, turns)| *turns > 0)
        .map(|(name, turns)| format!("{name} ({turns})"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The player's effect timers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    /// Turns of bleeding left.
    pub bleeding: u32,
    /// Turns of poison left.
    pub poisoned: u32,
    /// Turns of strength left (attacks deal 1.5×).
    pub strengthened: u32,
}

impl PlayerStatus {
    /// Apply start-of-turn damage rolls and count timers down.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> TickDamage {
        tick(&mut self.bleeding, &mut self.poisoned, rng)
    }

    /// Whether attacks get the strength bonus.
    pub fn is_strengthened(&self) -> bool {
        self.strengthened > 0
    }

    /// Comma-separated active effects, e.g. `Bleeding (2), Poisoned (1)`.
    pub fn summary(&self) -> String {
        describe(&[
            ("Bleeding", self.bleeding),
            ("Poisoned", self.poisoned),
            ("Strengthened", self.strengthened),
        ])
    }
}

/// The enemy's effect timers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStatus {
    /// Turns of bleeding left.
    pub bleeding: u32,
    /// Turns of poison left.
    pub poisoned: u32,
    /// Turns of weakness left (takes 1.5× damage).
    pub weakened: u32,
}

impl EnemyStatus {
    /// Apply start-of-turn damage rolls and count timers down.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> TickDamage {
        tick(&mut self.bleeding, &mut self.poisoned, rng)
    }

    /// Whether incoming attacks get the weakness bonus.
    pub fn is_weakened(&self) -> bool {
        self.weakened > 0
    }

    /// Comma-separated active effects.
    pub fn summary(&self) -> String {
        describe(&[
            ("Bleeding", self.bleeding),
            ("Poisoned", self.poisoned),
            ("Weakened", self.weakened),
        ])
    }
}
