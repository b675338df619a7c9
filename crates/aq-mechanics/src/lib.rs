//! Combat mechanics for Adventure Quest.
//!
//! Provides the injectable random source, status effect timers, and the
//! turn-based [`Encounter`] state machine that resolves a fight between the
//! player and one enemy.

pub mod combat;
pub mod dice;
pub mod error;
pub mod status;

pub use combat::{
    CombatAction, CombatOutcome, CombatPhase, CombatStep, Encounter, Potion, TurnReport,
    flee_chance, potions,
};
pub use dice::{RandomSource, ScriptedRandom, SeededRandom};
pub use error::{MechError, MechResult};
pub use status::{EnemyStatus, PlayerStatus, TickDamage};
