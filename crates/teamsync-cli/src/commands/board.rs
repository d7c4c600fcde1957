//! Board commands: load an optimizer run, inspect it, move events around.

use std::path::PathBuf;

use clap::Subcommand;
use teamsync_core::{validate_day, Board, Config, MoveRequest, Slot, ValidationError};

use crate::session::SessionStore;

use super::person_index;

#[derive(Subcommand)]
pub enum BoardAction {
    /// Load a board from an optimizer response file
    Load {
        /// Path to the optimizer response JSON
        payload: PathBuf,
        /// Day to plan for, YYYY-MM-DD (defaults to the configured day)
        #[arg(long)]
        day: Option<String>,
    },
    /// Show the current board
    Show {
        /// Print the board as JSON
        #[arg(long)]
        json: bool,
        /// List unassigned events as well
        #[arg(long)]
        unassigned: bool,
    },
    /// Move an event to another person or another position
    Move {
        /// Person the event is taken from (numbered from 1)
        #[arg(long)]
        from_person: usize,
        /// Position of the event in that column (numbered from 1)
        #[arg(long)]
        from_pos: usize,
        /// Person the event goes to (defaults to --from-person)
        #[arg(long)]
        to_person: Option<usize>,
        /// Position to drop the event at (defaults to the end of the column)
        #[arg(long)]
        to_pos: Option<usize>,
    },
    /// Forget the current board
    Clear,
}

pub fn run(action: BoardAction, store: &SessionStore) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BoardAction::Load { payload, day } => {
            let day = match day {
                Some(day) => {
                    validate_day(&day)?;
                    day
                }
                None => Config::load_or_default().day,
            };
            let text = std::fs::read_to_string(&payload)?;
            let board = Board::from_response_json(&text, day)?;
            store.save(&board)?;
            println!(
                "Board loaded: {} people, {} events, {} unassigned (day {})",
                board.person_count(),
                board.total_events(),
                board.unassigned().len(),
                board.day()
            );
        }
        BoardAction::Show { json, unassigned } => {
            let board = store.require()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                print_board(&board, unassigned);
            }
        }
        BoardAction::Move {
            from_person,
            from_pos,
            to_person,
            to_pos,
        } => {
            let board = store.require()?;
            let (source, destination) =
                resolve_move(&board, from_person, from_pos, to_person, to_pos)?;
            if source == destination {
                println!("Event is already at that position");
                return Ok(());
            }
            let name = board.columns()[source.column][source.index].name.clone();
            let board = board.reassign(MoveRequest::new(source, destination));
            store.save(&board)?;
            println!(
                "Moved \"{name}\" to persona {} position {}",
                destination.column + 1,
                destination.index + 1
            );
        }
        BoardAction::Clear => {
            if store.clear()? {
                println!("Board cleared");
            } else {
                println!("No board to clear");
            }
        }
    }
    Ok(())
}

/// Turn 1-based command-line coordinates into board slots.
///
/// The destination position is checked against the destination column as
/// it stands once the source record is lifted out, matching how the board
/// applies the move. Omitting the position drops the event at the end.
fn resolve_move(
    board: &Board,
    from_person: usize,
    from_pos: usize,
    to_person: Option<usize>,
    to_pos: Option<usize>,
) -> Result<(Slot, Slot), ValidationError> {
    let source_col = person_index(board, from_person)?;
    let source_len = board.columns()[source_col].len();
    let source_idx = match from_pos.checked_sub(1) {
        Some(index) if index < source_len => index,
        _ => {
            return Err(ValidationError::OutOfBounds {
                collection: format!("person {from_person}'s column"),
                index: from_pos,
                len: source_len,
            })
        }
    };

    let dest_col = match to_person {
        Some(person) => person_index(board, person)?,
        None => source_col,
    };
    let dest_len = if dest_col == source_col {
        board.columns()[dest_col].len() - 1
    } else {
        board.columns()[dest_col].len()
    };
    let dest_idx = match to_pos {
        None => dest_len,
        Some(pos) => match pos.checked_sub(1) {
            Some(index) if index <= dest_len => index,
            _ => {
                return Err(ValidationError::OutOfBounds {
                    collection: format!("person {}'s column", dest_col + 1),
                    index: pos,
                    len: dest_len + 1,
                })
            }
        },
    };

    Ok((Slot::new(source_col, source_idx), Slot::new(dest_col, dest_idx)))
}

fn print_board(board: &Board, include_unassigned: bool) {
    let stats = board.stats();
    println!(
        "Day {}  |  {} people  |  {} events  |  longest walk {} min",
        board.day(),
        board.person_count(),
        stats.total_events,
        stats.max_walk_minutes
    );
    for (person, column) in board.columns().iter().enumerate() {
        println!();
        println!("Persona {} ({} events)", person + 1, column.len());
        if column.is_empty() {
            println!("  (no events)");
            continue;
        }
        for (pos, record) in column.iter().enumerate() {
            let mut line = format!("  {}. {}", pos + 1, record.name);
            if !record.start_time.is_empty() || !record.end_time.is_empty() {
                line.push_str(&format!("  [{} - {}]", record.start_time, record.end_time));
            }
            if record.has_location() {
                line.push_str(&format!("  @ {}", record.location));
            }
            println!("{line}");
            if let Some(backup) = &record.backup {
                println!("     plan B: {}", backup.name);
            }
            if record.walking_time_to_next > 0 {
                println!("     walk to next: {} min", record.walking_time_to_next);
            }
        }
    }
    if include_unassigned && !board.unassigned().is_empty() {
        println!();
        println!("Unassigned ({})", board.unassigned().len());
        for record in board.unassigned() {
            if record.has_location() {
                println!("  - {}  @ {}", record.name, record.location);
            } else {
                println!("  - {}", record.name);
            }
        }
    }
}
