use crate::id::LocationId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors raised while building or loading a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested location is not part of the world map.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// The world file could not be parsed or written.
    #[error("invalid world file: {0}")]
    Json(#[from] serde_json::Error),

    /// The world references something it does not define.
    #[error("validation error: {0}")]
    Validation(String),
}
