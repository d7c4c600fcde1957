//! Core error types for teamsync-core.
//!
//! The board's expected steady states (empty column, cancelled drop,
//! same-position move) are not errors -- they surface as `None` returns or
//! unchanged boards. The enums here cover what is left: a rejected optimizer
//! payload and caller input that names a position the board does not have.

use thiserror::Error;

/// Top-level error type for teamsync-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Optimizer payload could not become a board
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Caller-supplied value failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while turning an optimizer response into a board.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The optimizer reported a non-success status.
    #[error("optimizer rejected the request: {message}")]
    Backend { message: String },

    /// Status was success but the response carries no agent schedules.
    #[error("optimizer response carries no agent schedules")]
    MissingSchedule,
}

/// Validation errors for caller-supplied coordinates and values.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Position does not exist on the rendered board
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },

    /// Day string is not a calendar date
    #[error("Invalid day '{value}': expected YYYY-MM-DD")]
    InvalidDay { value: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
