// Property-based tests for the layout engine's invariants.

use proptest::prelude::*;

use agenda_grid::models::event::DayEvent;
use agenda_grid::services::layout::layout;

fn arb_events() -> impl Strategy<Value = Vec<DayEvent>> {
    prop::collection::vec((0u32..1440, 0u32..360), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(index, (start, duration))| {
                DayEvent::new(format!("e{index}"), format!("Event {index}"), start, duration)
                    .expect("generated event is valid")
            })
            .collect()
    })
}

proptest! {
    /// Truly overlapping events never share a column.
    #[test]
    fn prop_overlapping_events_get_distinct_columns(events in arb_events()) {
        let positioned = layout(&events);
        for (i, p) in positioned.iter().enumerate() {
            for q in positioned.iter().skip(i + 1) {
                if p.event.overlaps(&q.event) {
                    prop_assert_ne!(p.column, q.column);
                }
            }
        }
    }

    /// Every column index fits inside its cluster width.
    #[test]
    fn prop_column_within_cluster(events in arb_events()) {
        for p in layout(&events) {
            prop_assert!(p.total_columns >= 1);
            prop_assert!(p.column < p.total_columns);
        }
    }

    /// No events are lost or invented.
    #[test]
    fn prop_output_length_matches_input(events in arb_events()) {
        prop_assert_eq!(layout(&events).len(), events.len());
    }

    /// Output comes back sorted by start time.
    #[test]
    fn prop_output_sorted_by_start(events in arb_events()) {
        let positioned = layout(&events);
        for pair in positioned.windows(2) {
            prop_assert!(pair[0].event.start_minutes <= pair[1].event.start_minutes);
        }
    }

    /// Same input, same output: the engine is deterministic.
    #[test]
    fn prop_layout_is_deterministic(events in arb_events()) {
        prop_assert_eq!(layout(&events), layout(&events));
    }

    /// A lone event is always full width.
    #[test]
    fn prop_single_event_full_width(start in 0u32..1440, duration in 0u32..360) {
        let events = vec![DayEvent::new("solo", "Solo", start, duration).unwrap()];
        let positioned = layout(&events);
        prop_assert_eq!(positioned[0].column, 0);
        prop_assert_eq!(positioned[0].total_columns, 1);
    }
}
