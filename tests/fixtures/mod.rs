// Shared fixtures for integration and scenario tests
// Each test target pulls in the subset it needs
#![allow(dead_code)]

use agenda_grid::models::event::DayEvent;
use agenda_grid::services::layout::PositionedEvent;

/// Event with an id, a start in minutes from midnight, and a duration.
pub fn event(id: &str, start_minutes: u32, duration_minutes: u32) -> DayEvent {
    DayEvent::new(id, format!("Event {id}"), start_minutes, duration_minutes).unwrap()
}

/// Event starting at `HH:MM` with a duration in minutes.
pub fn event_at(id: &str, hhmm: &str, duration_minutes: u32) -> DayEvent {
    let start = agenda_grid::utils::date::parse_hhmm(hhmm)
        .unwrap_or_else(|| panic!("bad fixture time {hhmm:?}"));
    event(id, start, duration_minutes)
}

/// Look up a positioned event by id.
pub fn find<'a>(positioned: &'a [PositionedEvent], id: &str) -> &'a PositionedEvent {
    positioned
        .iter()
        .find(|p| p.event.id == id)
        .unwrap_or_else(|| panic!("no positioned event with id {id:?}"))
}
