//! Command interpreter and session driver for Adventure Quest.
//!
//! Turns raw player input into state changes and narration: verb parsing
//! with alias tables, substring target resolution, the per-verb command
//! handlers, the spoils of a won fight, and an [`AdventureSession`] that
//! routes input to either the interpreter or the active combat encounter.

/// Session configuration.
pub mod config;
/// Victory resolution and quest hook narration.
pub mod defeat;
/// Error types for the fiction engine.
pub mod error;
pub mod interpreter;
pub mod narration;
/// Command parsing and target resolution.
pub mod parser;
/// Adventure session management.
pub mod session;

pub use config::SessionConfig;
pub use defeat::resolve_victory;
pub use error::{FictionError, FictionResult};
pub use interpreter::{EnemyEngagement, Outcome, Signal, interpret};
pub use narration::Narration;
pub use parser::{Command, Verb, parse_command};
pub use session::AdventureSession;
