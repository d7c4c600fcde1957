//! Optimizer response envelope.
//!
//! The schedule optimizer answers with a JSON envelope: a `status` string,
//! an optional human-readable `message`, the per-person schedule grid, and
//! whatever events it could not place. This module models that envelope;
//! turning a successful one into a working copy is
//! [`Board::from_response`](crate::board::Board::from_response).

use serde::{Deserialize, Serialize};

use crate::board::EventRecord;

/// Status value the optimizer uses for a run that produced a schedule.
pub const STATUS_SUCCESS: &str = "success";

/// One optimizer run's answer, as received on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// Outcome marker, `"success"` or an error tag.
    pub status: String,

    /// Explanation that accompanies a non-success status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// One column of events per person, in visit order. Absent when the
    /// run produced nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents_schedule: Option<Vec<Vec<EventRecord>>>,

    /// Events the optimizer had to leave out of every column.
    #[serde(default)]
    pub unassigned_events: Vec<EventRecord>,
}

impl ScheduleResponse {
    /// Whether the optimizer reported a successful run.
    ///
    /// Success of the run is not the same as having a schedule; a
    /// malformed success envelope may still lack `agents_schedule`.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Parse an envelope from raw JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
