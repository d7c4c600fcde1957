//! Agenda board: per-person columns of scheduled events.
//!
//! A [`Board`] is the working copy of an optimizer run:
//! - one column of [`EventRecord`]s per person, in visit order
//! - the events the optimizer could not place anywhere
//! - the conference day the board is being planned for
//!
//! The board owns its records outright. Building one from a
//! [`ScheduleResponse`](crate::optimizer::ScheduleResponse) clones the
//! payload, so later edits never alias optimizer data held elsewhere.

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ValidationError};
use crate::optimizer::ScheduleResponse;

mod event;
mod reassign;

pub use event::EventRecord;
pub use reassign::{MoveRequest, Slot};

/// Conference day used when nobody picked one.
pub const DEFAULT_DAY: &str = "2026-03-12";

/// Working copy of a scheduled plan, one column per person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Vec<EventRecord>>,
    unassigned: Vec<EventRecord>,
    day: String,
}

/// Aggregate numbers shown alongside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStats {
    /// Events across all person columns. Unassigned events do not count.
    pub total_events: usize,
    /// Longest single walking leg anywhere on the board, in minutes.
    pub max_walk_minutes: u32,
}

impl Board {
    // ── Construction ─────────────────────────────────────────

    /// Create a board from already-grouped columns.
    ///
    /// Each record's `assigned_person` is rewritten to the column it sits
    /// in, so the board starts consistent even if the payload was not.
    pub fn new(
        mut columns: Vec<Vec<EventRecord>>,
        unassigned: Vec<EventRecord>,
        day: impl Into<String>,
    ) -> Self {
        for (person, column) in columns.iter_mut().enumerate() {
            for record in column.iter_mut() {
                record.assigned_person = person;
            }
        }
        Self {
            columns,
            unassigned,
            day: day.into(),
        }
    }

    /// Build a board from an optimizer response, planning for `day`.
    ///
    /// The response's columns are cloned into the board, so the caller may
    /// keep (or drop) the response independently.
    pub fn from_response(
        response: &ScheduleResponse,
        day: impl Into<String>,
    ) -> Result<Self, ScheduleError> {
        if !response.is_success() {
            return Err(ScheduleError::Backend {
                message: response
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("status '{}'", response.status)),
            });
        }
        let columns = response
            .agents_schedule
            .clone()
            .ok_or(ScheduleError::MissingSchedule)?;
        Ok(Self::new(columns, response.unassigned_events.clone(), day))
    }

    /// Parse an optimizer envelope from JSON text and build a board from it.
    pub fn from_response_json(json: &str, day: impl Into<String>) -> crate::error::Result<Self> {
        let response = ScheduleResponse::from_json(json)?;
        Ok(Self::from_response(&response, day)?)
    }

    // ── Queries ──────────────────────────────────────────────

    /// All person columns, in person order.
    pub fn columns(&self) -> &[Vec<EventRecord>] {
        &self.columns
    }

    /// One person's column, or `None` when the board has no such person.
    pub fn column(&self, person: usize) -> Option<&[EventRecord]> {
        self.columns.get(person).map(Vec::as_slice)
    }

    /// Events the optimizer left unplaced.
    pub fn unassigned(&self) -> &[EventRecord] {
        &self.unassigned
    }

    /// Day this board is planned for, as `YYYY-MM-DD`.
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Number of person columns.
    pub fn person_count(&self) -> usize {
        self.columns.len()
    }

    /// Events across all person columns.
    pub fn total_events(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Fold the board into its headline numbers.
    pub fn stats(&self) -> BoardStats {
        let max_walk_minutes = self
            .columns
            .iter()
            .flatten()
            .map(|record| record.walking_time_to_next)
            .max()
            .unwrap_or(0);
        BoardStats {
            total_events: self.total_events(),
            max_walk_minutes,
        }
    }
}

/// Check that a day string is a real calendar date in `YYYY-MM-DD` form.
///
/// The form is exact: the calendar exporter strips separators and expects
/// eight digits, so `2026-3-12` is rejected even though it names a real date.
pub fn validate_day(day: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidDay {
        value: day.to_string(),
    };
    let parsed = chrono::NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| invalid())?;
    if parsed.format("%Y-%m-%d").to_string() != day {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(columns: Vec<Vec<EventRecord>>) -> ScheduleResponse {
        ScheduleResponse {
            status: "success".into(),
            message: None,
            agents_schedule: Some(columns),
            unassigned_events: vec![EventRecord::new("Overflow Party", "", "", "")],
        }
    }

    #[test]
    fn from_response_clones_columns_and_unassigned() {
        let response = response_with(vec![
            vec![EventRecord::new("Keynote", "09:00:00", "10:00:00", "ACC")],
            vec![],
        ]);
        let board = Board::from_response(&response, DEFAULT_DAY).unwrap();

        assert_eq!(board.person_count(), 2);
        assert_eq!(board.column(0).unwrap()[0].name, "Keynote");
        assert_eq!(board.unassigned().len(), 1);
        assert_eq!(board.day(), "2026-03-12");
        // the response still owns its own copy
        assert_eq!(response.agents_schedule.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn from_response_rejects_failure_status() {
        let response = ScheduleResponse {
            status: "error".into(),
            message: Some("no feasible assignment".into()),
            agents_schedule: None,
            unassigned_events: vec![],
        };
        let err = Board::from_response(&response, DEFAULT_DAY).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Backend { ref message } if message == "no feasible assignment"
        ));
    }

    #[test]
    fn from_response_failure_without_message_reports_status() {
        let response = ScheduleResponse {
            status: "timeout".into(),
            message: None,
            agents_schedule: None,
            unassigned_events: vec![],
        };
        let err = Board::from_response(&response, DEFAULT_DAY).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Backend { ref message } if message == "status 'timeout'"
        ));
    }

    #[test]
    fn from_response_json_goes_end_to_end() {
        let board = Board::from_response_json(
            r#"{"status": "success", "agents_schedule": [[{"Event Name": "Keynote"}]]}"#,
            DEFAULT_DAY,
        )
        .unwrap();
        assert_eq!(board.column(0).unwrap()[0].name, "Keynote");

        let err = Board::from_response_json("{not json", DEFAULT_DAY).unwrap_err();
        assert!(matches!(err, crate::error::CoreError::Json(_)));

        let err = Board::from_response_json(r#"{"status": "error"}"#, DEFAULT_DAY).unwrap_err();
        assert!(matches!(err, crate::error::CoreError::Schedule(_)));
    }

    #[test]
    fn from_response_requires_agent_schedules() {
        let response = ScheduleResponse {
            status: "success".into(),
            message: None,
            agents_schedule: None,
            unassigned_events: vec![],
        };
        let err = Board::from_response(&response, DEFAULT_DAY).unwrap_err();
        assert!(matches!(err, ScheduleError::MissingSchedule));
    }

    #[test]
    fn new_rewrites_assigned_person_per_column() {
        let mut stray = EventRecord::new("Stray", "", "", "");
        stray.assigned_person = 7;
        let board = Board::new(
            vec![vec![], vec![stray], vec![EventRecord::new("Ok", "", "", "")]],
            vec![],
            DEFAULT_DAY,
        );
        assert_eq!(board.column(1).unwrap()[0].assigned_person, 1);
        assert_eq!(board.column(2).unwrap()[0].assigned_person, 2);
    }

    #[test]
    fn column_out_of_range_is_none() {
        let board = Board::new(vec![vec![]], vec![], DEFAULT_DAY);
        assert!(board.column(0).is_some());
        assert!(board.column(1).is_none());
    }

    #[test]
    fn stats_fold_counts_and_max_walk() {
        let board = Board::new(
            vec![
                vec![
                    EventRecord::new("A", "", "", "").with_walking_time(9),
                    EventRecord::new("B", "", "", "").with_walking_time(23),
                ],
                vec![EventRecord::new("C", "", "", "").with_walking_time(4)],
            ],
            vec![EventRecord::new("Unplaced", "", "", "").with_walking_time(99)],
            DEFAULT_DAY,
        );
        let stats = board.stats();
        assert_eq!(stats.total_events, 3);
        // unassigned events stay out of the fold
        assert_eq!(stats.max_walk_minutes, 23);
    }

    #[test]
    fn stats_on_empty_board_are_zero() {
        let board = Board::new(vec![], vec![], DEFAULT_DAY);
        assert_eq!(
            board.stats(),
            BoardStats {
                total_events: 0,
                max_walk_minutes: 0
            }
        );
    }

    #[test]
    fn board_round_trips_through_json() {
        let board = Board::new(
            vec![vec![EventRecord::new("Keynote", "09:00:00", "10:00:00", "ACC")
                .with_uid("kn-001")]],
            vec![],
            "2026-03-14",
        );
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn validate_day_accepts_real_dates_only() {
        assert!(validate_day("2026-03-12").is_ok());
        assert!(validate_day("2026-3-12").is_err());
        assert!(validate_day("2026-13-40").is_err());
        assert!(validate_day("march 12").is_err());
    }
}
