//! Exporters: hand a person's column to the outside world.
//!
//! Two targets, both derived from the live board:
//! - [`export_person_calendar`] renders an iCalendar artifact per person
//! - [`export_person_route`] builds a walking-directions link per person

mod calendar;
mod route;

pub use calendar::{export_person_calendar, CalendarArtifact};
pub use route::export_person_route;
