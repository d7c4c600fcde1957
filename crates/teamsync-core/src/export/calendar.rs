//! iCalendar export of one person's agenda.
//!
//! Produces the same artifact the conference tooling has always shipped:
//! a `VCALENDAR` with one `VEVENT` per scheduled event, Central-time
//! `DTSTART`/`DTEND`, and a filename of the form
//! `Agenda_Persona_<n>_<day>.ics`.

use std::path::{Path, PathBuf};

use crate::board::{Board, EventRecord};

const PRODID: &str = "-//SXSW Team Sync//EN";
const UID_DOMAIN: &str = "sxswteamsync.com";
const TZID: &str = "America/Chicago";

/// Stamp used when a date or time turns out not to be one.
const FALLBACK_STAMP: &str = "20260312T000000";

const DEFAULT_START: &str = "09:00:00";
const DEFAULT_END: &str = "10:00:00";

/// A rendered calendar file, ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarArtifact {
    /// Suggested filename, `Agenda_Persona_<n>_<day>.ics`.
    pub filename: String,
    /// Full iCalendar text.
    pub content: String,
}

impl CalendarArtifact {
    /// Write the artifact under `dir`, creating the directory as needed.
    /// Returns the path written.
    pub fn write_to(&self, dir: &Path) -> crate::error::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Collapse `YYYY-MM-DD` and `HH:MM:SS` into an iCalendar local stamp,
/// `YYYYMMDDTHHMMSS`.
///
/// Separators are stripped and the time is cut to six digits, then
/// zero-padded back up to six. Input that does not reduce to digits
/// yields [`FALLBACK_STAMP`].
fn format_stamp(date: &str, time: &str) -> String {
    let date: String = date.chars().filter(|c| *c != '-').collect();
    let time: String = time.chars().filter(|c| *c != ':').take(6).collect();

    let date_ok = date.len() == 8 && date.chars().all(|c| c.is_ascii_digit());
    let time_ok = time.chars().all(|c| c.is_ascii_digit());
    if !date_ok || !time_ok {
        return FALLBACK_STAMP.to_string();
    }
    format!("{date}T{time:0<6}")
}

fn push_event(
    ics: &mut String,
    record: &EventRecord,
    person: usize,
    position: usize,
    day: &str,
) {
    let start = if record.start_time.is_empty() {
        DEFAULT_START
    } else {
        &record.start_time
    };
    let end = if record.end_time.is_empty() {
        DEFAULT_END
    } else {
        &record.end_time
    };
    let date = record.effective_date(day);
    let dtstart = format_stamp(date, start);
    let dtend = format_stamp(date, end);
    let uid = record.uid_or_synthesized(person, position);

    ics.push_str("BEGIN:VEVENT\n");
    ics.push_str(&format!("UID:{uid}@{UID_DOMAIN}\n"));
    ics.push_str(&format!("DTSTAMP:{dtstart}Z\n"));
    ics.push_str(&format!("DTSTART;TZID={TZID}:{dtstart}\n"));
    ics.push_str(&format!("DTEND;TZID={TZID}:{dtend}\n"));
    ics.push_str(&format!("SUMMARY:{} - Persona {}\n", record.name, person + 1));
    if record.has_location() {
        ics.push_str(&format!("LOCATION:{}\n", record.location));
    }
    ics.push_str("END:VEVENT\n");
}

/// Render one person's column as an iCalendar artifact.
///
/// Returns `None` when the board has no such person or the column holds
/// no events; there is nothing worth shipping in either case.
pub fn export_person_calendar(board: &Board, person: usize) -> Option<CalendarArtifact> {
    let column = board.column(person)?;
    if column.is_empty() {
        return None;
    }

    let mut content = format!("BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:{PRODID}\n");
    for (position, record) in column.iter().enumerate() {
        push_event(&mut content, record, person, position, board.day());
    }
    content.push_str("END:VCALENDAR");

    Some(CalendarArtifact {
        filename: format!("Agenda_Persona_{}_{}.ics", person + 1, board.day()),
        content,
    })
}
