//! CLI command implementations.

pub mod board;
pub mod config;
pub mod export;

use teamsync_core::{Board, ValidationError};

/// Resolve a person number as typed on the command line (numbered from 1)
/// to the board's zero-based column index.
pub fn person_index(board: &Board, person: usize) -> Result<usize, ValidationError> {
    match person.checked_sub(1) {
        Some(index) if index < board.person_count() => Ok(index),
        _ => Err(ValidationError::OutOfBounds {
            collection: "people".to_string(),
            index: person,
            len: board.person_count(),
        }),
    }
}
