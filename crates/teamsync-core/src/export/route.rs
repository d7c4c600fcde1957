//! Walking-route export of one person's agenda.
//!
//! Builds a Google Maps directions link that chains the person's venues in
//! visit order: first venue as origin, last as destination, everything in
//! between as waypoints.

use crate::board::Board;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1&travelmode=walking";

/// Build a walking-directions URL for one person's column.
///
/// Events without a venue are skipped. Returns `None` when the board has
/// no such person or no event in the column names a venue; a route needs
/// at least one place to point at. A single venue produces a link whose
/// origin and destination coincide.
pub fn export_person_route(board: &Board, person: usize) -> Option<String> {
    let column = board.column(person)?;
    let locations: Vec<&str> = column
        .iter()
        .filter(|record| record.has_location())
        .map(|record| record.location.as_str())
        .collect();

    let origin = locations.first()?;
    let destination = locations.last()?;
    let mut url = format!(
        "{DIRECTIONS_BASE}&origin={}&destination={}",
        urlencoding::encode(origin),
        urlencoding::encode(destination)
    );
    if locations.len() > 2 {
        let waypoints: Vec<_> = locations[1..locations.len() - 1]
            .iter()
            .map(|location| urlencoding::encode(location))
            .collect();
        url.push_str(&format!("&waypoints={}", waypoints.join("|")));
    }
    Some(url)
}
