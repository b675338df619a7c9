//! Error types for the combat resolver.

/// Errors that can occur while resolving combat.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The input is not one of the five combat actions.
    #[error("invalid combat action: '{0}'")]
    InvalidAction(String),

    /// The encounter already ended; no further actions are accepted.
    #[error("the encounter is over")]
    EncounterOver,
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
