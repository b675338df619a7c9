//! Error types for the command interpreter.
//!
//! Player mistakes are narrated, never returned as errors. These variants
//! cover broken invariants: a world that references things it doesn't
//! contain.

use aq_core::{EnemyId, LocationId, WorldError};
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during interactive fiction.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The player stands somewhere the world doesn't define.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// A location lists a connection the world doesn't define.
    #[error("{from} connects to unknown location {to}")]
    DanglingConnection {
        /// Location holding the connection.
        from: LocationId,
        /// Missing destination.
        to: LocationId,
    },

    /// A location lists an enemy with no template.
    #[error("enemy not found: {0}")]
    EnemyNotFound(EnemyId),

    /// Combat failed to resolve.
    #[error("combat error: {0}")]
    Combat(#[from] aq_mechanics::MechError),

    /// World lookup error.
    #[error(transparent)]
    World(#[from] WorldError),
}
