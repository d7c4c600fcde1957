//! Event record model.
//!
//! An [`EventRecord`] is one scheduled conference event as the optimizer
//! hands it over. Field names on the wire are the optimizer's human-readable
//! headers ("Event Name", "Start Time", ...), mapped here onto Rust names.
//! Keys this crate does not model are kept verbatim in `extra` so a board
//! serialized back out never loses payload data.

use serde::{Deserialize, Serialize};

/// A single scheduled event inside a person's column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Display name of the event.
    #[serde(rename = "Event Name")]
    pub name: String,

    /// Local start time as `HH:MM:SS`. May be empty when the optimizer
    /// could not pin the event down.
    #[serde(rename = "Start Time", default)]
    pub start_time: String,

    /// Local end time as `HH:MM:SS`.
    #[serde(rename = "End Time", default)]
    pub end_time: String,

    /// Venue name. Empty when the event has no fixed venue.
    #[serde(rename = "Location", default)]
    pub location: String,

    /// Zero-based index of the person column this event belongs to.
    #[serde(rename = "Assigned Agent", default)]
    pub assigned_person: usize,

    /// Minutes of walking to reach the next event in the column. Computed
    /// by the optimizer for its own ordering; moves do not recompute it.
    #[serde(rename = "Walking Time To Next", default)]
    pub walking_time_to_next: u32,

    /// Minutes since midnight at which the optimizer slotted the event.
    #[serde(
        rename = "Scheduled Start (min)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_start_min: Option<i64>,

    /// Calendar day as `YYYY-MM-DD`, when the optimizer pinned one.
    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Stable identifier from the source catalog.
    #[serde(rename = "UID", default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Alternative event the optimizer suggests if this one falls through.
    #[serde(
        rename = "Backup Event",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub backup: Option<Box<EventRecord>>,

    /// Wire fields this crate does not interpret, preserved round-trip.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EventRecord {
    /// Create a new event record with the given core fields.
    pub fn new(
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            location: location.into(),
            assigned_person: 0,
            walking_time_to_next: 0,
            scheduled_start_min: None,
            date: None,
            uid: None,
            backup: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the calendar day.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the catalog identifier.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Set the walking time to the next event in the column.
    pub fn with_walking_time(mut self, minutes: u32) -> Self {
        self.walking_time_to_next = minutes;
        self
    }

    /// Attach a backup event.
    pub fn with_backup(mut self, backup: EventRecord) -> Self {
        self.backup = Some(Box::new(backup));
        self
    }

    // ── Queries ──────────────────────────────────────────────

    /// Day this event falls on, falling back to the board's selected day
    /// when the record carries none. An empty `Date` counts as none.
    pub fn effective_date<'a>(&'a self, selected_day: &'a str) -> &'a str {
        match self.date.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => selected_day,
        }
    }

    /// Catalog identifier, or a positional `evt-{person}-{position}`
    /// stand-in when the record carries none. An empty `UID` counts
    /// as none.
    pub fn uid_or_synthesized(&self, person: usize, position: usize) -> String {
        match self.uid.as_deref() {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => format!("evt-{person}-{position}"),
        }
    }

    /// Whether the event names a venue.
    pub fn has_location(&self) -> bool {
        !self.location.is_empty()
    }
}
