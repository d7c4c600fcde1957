//! Export commands: calendar files and walking-route links.

use std::path::PathBuf;

use clap::Subcommand;
use teamsync_core::{export_person_calendar, export_person_route, Config};

use crate::session::SessionStore;

use super::person_index;

#[derive(Subcommand)]
pub enum ExportAction {
    /// Write iCalendar agenda files
    Ics {
        /// Person to export (numbered from 1); everyone when omitted
        #[arg(long)]
        person: Option<usize>,
        /// Directory to write into (defaults to the configured output dir,
        /// then the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a Google Maps walking route
    Route {
        /// Person to route (numbered from 1)
        #[arg(long)]
        person: usize,
        /// Also hand the link to the system browser
        #[arg(long)]
        open: bool,
    },
}

pub fn run(action: ExportAction, store: &SessionStore) -> Result<(), Box<dyn std::error::Error>> {
    let board = store.require()?;
    let config = Config::load_or_default();

    match action {
        ExportAction::Ics { person, out } => {
            let dir = out
                .or(config.export.output_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            let people: Vec<usize> = match person {
                Some(person) => vec![person_index(&board, person)?],
                None => (0..board.person_count()).collect(),
            };

            let mut written = 0usize;
            for person in people {
                match export_person_calendar(&board, person) {
                    Some(artifact) => {
                        let path = artifact.write_to(&dir)?;
                        println!("Wrote {}", path.display());
                        written += 1;
                    }
                    None => println!("Persona {} has no events; skipped", person + 1),
                }
            }
            if written == 0 {
                println!("Nothing to export");
            }
        }
        ExportAction::Route { person, open } => {
            let index = person_index(&board, person)?;
            match export_person_route(&board, index) {
                Some(route) => {
                    let link = url::Url::parse(&route)?;
                    println!("{route}");
                    if open || config.export.open_route_links {
                        open::that(link.as_str())?;
                    }
                }
                None => println!("Persona {person} has no venues to route"),
            }
        }
    }
    Ok(())
}
