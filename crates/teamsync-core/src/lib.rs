//! # Team Sync Core Library
//!
//! This library provides the core logic for the Team Sync conference
//! planner. It implements a CLI-first philosophy: all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Board**: Per-person agenda columns built from an optimizer run,
//!   plus the drag-style reassignment engine that moves events between
//!   columns
//! - **Exporters**: iCalendar artifacts and Google Maps walking-route
//!   links derived from the live board
//! - **Optimizer**: Wire model of the schedule optimizer's response
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Board`]: Working copy of a scheduled plan
//! - [`MoveRequest`]: One drag of an event between board slots
//! - [`ScheduleResponse`]: Optimizer response envelope
//! - [`Config`]: Application configuration management

pub mod board;
pub mod config;
pub mod error;
pub mod export;
pub mod optimizer;

pub use board::{validate_day, Board, BoardStats, EventRecord, MoveRequest, Slot, DEFAULT_DAY};
pub use config::Config;
pub use error::{CoreError, ScheduleError, ValidationError};
pub use export::{export_person_calendar, export_person_route, CalendarArtifact};
pub use optimizer::ScheduleResponse;
