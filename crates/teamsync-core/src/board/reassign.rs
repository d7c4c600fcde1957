//! Reassignment engine: drag-style moves between board slots.
//!
//! A move lifts one record out of its source slot and drops it into a
//! destination slot, in the same column or another person's. Dropping
//! nowhere (no destination) cancels the move. Moves never add or remove
//! records, and they do not recompute `walking_time_to_next`; those
//! figures stay as the optimizer left them.

use serde::{Deserialize, Serialize};

use super::Board;

/// One position on the board: a column and an index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Zero-based person column.
    pub column: usize,
    /// Zero-based position within the column.
    pub index: usize,
}

impl Slot {
    pub fn new(column: usize, index: usize) -> Self {
        Self { column, index }
    }
}

/// A requested move of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Where the record is lifted from.
    pub source: Slot,
    /// Where it is dropped, or `None` when the drop was cancelled.
    pub destination: Option<Slot>,
}

impl MoveRequest {
    pub fn new(source: Slot, destination: Slot) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// A move that was picked up but dropped nowhere.
    pub fn cancelled(source: Slot) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

impl Board {
    /// Apply one move and return the resulting board.
    ///
    /// A cancelled request, or one whose destination equals its source,
    /// returns the board unchanged. Otherwise the record is removed from
    /// the source slot, stamped with the destination column as its
    /// assigned person, and inserted at the destination index. For a move
    /// within one column the destination index addresses the column as it
    /// stands after the removal.
    ///
    /// # Panics
    ///
    /// Panics when the source slot does not exist on the board, when the
    /// destination column does not exist, or when the destination index
    /// is past the end of the destination column (after removal). Callers
    /// taking outside input should range-check against [`Board::column`]
    /// first.
    pub fn reassign(mut self, request: MoveRequest) -> Board {
        let Some(destination) = request.destination else {
            return self;
        };
        let source = request.source;
        if source == destination {
            return self;
        }

        let mut record = self.columns[source.column].remove(source.index);
        record.assigned_person = destination.column;
        self.columns[destination.column].insert(destination.index, record);
        self
    }
}
