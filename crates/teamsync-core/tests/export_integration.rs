//! Integration tests for the full planning flow.
//!
//! These tests walk the path a planning session takes: parse an optimizer
//! envelope, build the board, shuffle events between people, and export
//! calendars and walking routes from the result.

use teamsync_core::{
    export_person_calendar, export_person_route, Board, MoveRequest, Slot, DEFAULT_DAY,
};

const ENVELOPE: &str = r#"{
    "status": "success",
    "message": "Scheduled 3 events across 2 personas",
    "agents_schedule": [
        [
            {
                "Event Name": "Opening Keynote",
                "Start Time": "09:00:00",
                "End Time": "10:00:00",
                "Location": "Austin Convention Center",
                "Assigned Agent": 0,
                "Walking Time To Next": 12,
                "UID": "kn-001"
            },
            {
                "Event Name": "Indie Rock Showcase",
                "Start Time": "14:30:00",
                "End Time": "15:30:00",
                "Location": "Mohawk",
                "Assigned Agent": 0
            }
        ],
        [
            {
                "Event Name": "Film Premiere",
                "Start Time": "11:00:00",
                "End Time": "12:30:00",
                "Location": "Paramount Theatre",
                "Assigned Agent": 1,
                "UID": ""
            }
        ]
    ],
    "unassigned_events": [
        {"Event Name": "Secret Show", "Location": "TBA"}
    ]
}"#;

fn load_board() -> Board {
    Board::from_response_json(ENVELOPE, DEFAULT_DAY).unwrap()
}

#[test]
fn test_envelope_to_calendar_artifact() {
    let board = load_board();
    let artifact = export_person_calendar(&board, 0).unwrap();

    assert_eq!(artifact.filename, "Agenda_Persona_1_2026-03-12.ics");
    assert_eq!(
        artifact.content,
        indoc::indoc! {"
            BEGIN:VCALENDAR
            VERSION:2.0
            PRODID:-//SXSW Team Sync//EN
            BEGIN:VEVENT
            UID:kn-001@sxswteamsync.com
            DTSTAMP:20260312T090000Z
            DTSTART;TZID=America/Chicago:20260312T090000
            DTEND;TZID=America/Chicago:20260312T100000
            SUMMARY:Opening Keynote - Persona 1
            LOCATION:Austin Convention Center
            END:VEVENT
            BEGIN:VEVENT
            UID:evt-0-1@sxswteamsync.com
            DTSTAMP:20260312T143000Z
            DTSTART;TZID=America/Chicago:20260312T143000
            DTEND;TZID=America/Chicago:20260312T153000
            SUMMARY:Indie Rock Showcase - Persona 1
            LOCATION:Mohawk
            END:VEVENT
            END:VCALENDAR"}
    );
}

#[test]
fn test_empty_wire_uid_synthesizes_positional_one() {
    let board = load_board();
    let artifact = export_person_calendar(&board, 1).unwrap();

    assert_eq!(artifact.filename, "Agenda_Persona_2_2026-03-12.ics");
    assert!(artifact.content.contains("UID:evt-1-0@sxswteamsync.com"));
    assert!(artifact.content.contains("SUMMARY:Film Premiere - Persona 2"));
}

#[test]
fn test_move_then_reexport_follows_the_board() {
    let board = load_board().reassign(MoveRequest::new(Slot::new(0, 1), Slot::new(1, 1)));

    let stats = board.stats();
    assert_eq!(stats.total_events, 3);
    assert_eq!(stats.max_walk_minutes, 12);

    // Persona 2 now carries the showcase, renumbered into its column
    let artifact = export_person_calendar(&board, 1).unwrap();
    assert!(artifact.content.contains("SUMMARY:Film Premiere - Persona 2"));
    assert!(artifact.content.contains("SUMMARY:Indie Rock Showcase - Persona 2"));
    assert!(artifact.content.contains("UID:evt-1-1@sxswteamsync.com"));

    // Persona 1 shrinks to the keynote alone
    let artifact = export_person_calendar(&board, 0).unwrap();
    assert!(artifact.content.contains("SUMMARY:Opening Keynote - Persona 1"));
    assert!(!artifact.content.contains("Indie Rock Showcase"));
}

#[test]
fn test_routes_from_live_board() {
    let board = load_board();
    assert_eq!(
        export_person_route(&board, 0).unwrap(),
        "https://www.google.com/maps/dir/?api=1&travelmode=walking\
         &origin=Austin%20Convention%20Center&destination=Mohawk"
    );

    let board = board.reassign(MoveRequest::new(Slot::new(0, 1), Slot::new(1, 1)));
    assert_eq!(
        export_person_route(&board, 1).unwrap(),
        "https://www.google.com/maps/dir/?api=1&travelmode=walking\
         &origin=Paramount%20Theatre&destination=Mohawk"
    );
    // a single remaining venue routes to itself
    assert_eq!(
        export_person_route(&board, 0).unwrap(),
        "https://www.google.com/maps/dir/?api=1&travelmode=walking\
         &origin=Austin%20Convention%20Center&destination=Austin%20Convention%20Center"
    );
}

#[test]
fn test_route_links_parse_as_urls() {
    let board = load_board();
    let url = url::Url::parse(&export_person_route(&board, 0).unwrap()).unwrap();

    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("www.google.com"));
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("api".into(), "1".into())));
    assert!(pairs.contains(&("travelmode".into(), "walking".into())));
    assert!(pairs.contains(&("origin".into(), "Austin Convention Center".into())));
}

#[test]
fn test_unassigned_events_ride_along() {
    let board = load_board();
    assert_eq!(board.unassigned().len(), 1);
    assert_eq!(board.unassigned()[0].name, "Secret Show");

    // moves never touch the unassigned list
    let board = board.reassign(MoveRequest::new(Slot::new(0, 0), Slot::new(1, 0)));
    assert_eq!(board.unassigned()[0].name, "Secret Show");
}
