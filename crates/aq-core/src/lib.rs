//! Core types for Adventure Quest: the world model, game state, and quests.
//!
//! This crate is passive data plus the quest tracker. It is independent of
//! command parsing and combat. You can construct a [`WorldModel`]
//! programmatically, take the built-in [`preset::oakvale`] world, or
//! deserialize one from JSON.

/// Enemy templates and per-encounter instances.
pub mod enemy;
/// Error types used throughout the crate.
pub mod error;
/// String identifier newtypes.
pub mod id;
/// Item catalog entries.
pub mod item;
/// Locations and their live contents.
pub mod location;
/// Non-player characters, dialogue, and trades.
pub mod npc;
/// Player state management.
pub mod player;
pub mod preset;
pub mod quest;
pub mod state;
/// Referential validation of a world.
pub mod validate;
/// The world map and catalogs.
pub mod world;

/// Re-export enemy types.
pub use enemy::{EnemyInstance, EnemyTemplate};
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export identifiers.
pub use id::{EnemyId, ItemId, LocationId, NpcId, QuestId};
/// Re-export item types.
pub use item::{Item, ItemKind};
/// Re-export location type.
pub use location::Location;
/// Re-export character types.
pub use npc::{Dialogue, Npc, Trade};
/// Re-export player state.
pub use player::PlayerState;
/// Re-export quest types.
pub use quest::{ObjectiveRef, Quest, QuestUpdate};
/// Re-export the game state.
pub use state::GameState;
/// Re-export validation.
pub use validate::{ValidationIssue, validate_world};
/// Re-export world model types.
pub use world::{StartingKit, VictoryCondition, WorldModel};
