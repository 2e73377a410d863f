// Day event layout engine
// Packs one day's overlapping events into side-by-side columns so the
// timeline can draw them as non-overlapping cards.

pub mod geometry;

use crate::models::event::DayEvent;

/// A day event decorated with its slot inside the local overlap cluster.
///
/// `column` is the horizontal slot index, `total_columns` the width of the
/// cluster the event landed in; `0 <= column < total_columns` always holds,
/// and two truly overlapping events never share a column.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEvent {
    pub event: DayEvent,
    pub column: u32,
    pub total_columns: u32,
}

/// Working record for the assignment pass. Only the interval matters here;
/// the event itself is merged back in afterwards.
#[derive(Debug, Clone, Copy)]
struct Slot {
    source: usize,
    start: u32,
    end: u32,
    column: Option<u32>,
    total_columns: u32,
}

impl Slot {
    fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Assign every event a column and cluster width for side-by-side rendering.
///
/// Events are sorted by start time (stable, so equal starts keep their input
/// order) and processed in that order. Each event anchors a forward-looking
/// overlap group: itself plus every later event starting before it ends.
/// The group's column count is the largest number of members any single
/// member truly overlaps, and unassigned members take the first free column
/// not occupied by an overlapping neighbour. An event keeps the column and
/// width it was given the first time a group reached it.
///
/// The forward-looking grouping matches the shipped client exactly: a
/// group can contain members that never overlap each other, so a cluster's
/// width can exceed what its mutual overlaps require and two such members
/// may share a column slot. Renderers relying on pixel parity depend on
/// this behaviour, quirks included.
///
/// Output is in start-sorted order. Computation is two-phase: the
/// assignment pass works on copied intervals, then the results are merged
/// into fresh `PositionedEvent`s, so the input is never mutated.
pub fn layout(events: &[DayEvent]) -> Vec<PositionedEvent> {
    let mut slots: Vec<Slot> = events
        .iter()
        .enumerate()
        .map(|(source, event)| Slot {
            source,
            start: event.start_minutes,
            end: event.end_minutes(),
            column: None,
            total_columns: 1,
        })
        .collect();
    slots.sort_by_key(|slot| slot.start);

    for anchor in 0..slots.len() {
        // The anchor plus every later event starting before the anchor ends
        let mut group: Vec<usize> = vec![anchor];
        for follower in (anchor + 1)..slots.len() {
            if slots[follower].start < slots[anchor].end {
                group.push(follower);
            }
        }

        // Columns needed: the most members any one member truly overlaps
        let mut max_concurrent: u32 = 0;
        for &member in &group {
            let mut concurrent: u32 = 0;
            for &other in &group {
                if slots[member].overlaps(&slots[other]) {
                    concurrent += 1;
                }
            }
            max_concurrent = max_concurrent.max(concurrent);
        }

        // First-fit assignment for members no earlier group has reached
        for &member in &group {
            if slots[member].column.is_some() {
                continue;
            }

            let total_columns = slots[member].total_columns.max(max_concurrent);
            slots[member].total_columns = total_columns;

            let free_column = (0..total_columns).find(|&candidate| {
                !group.iter().any(|&other| {
                    slots[other].column == Some(candidate)
                        && slots[member].overlaps(&slots[other])
                })
            });
            // max_concurrent covers the member and all overlapping
            // neighbours, so a free column always exists
            slots[member].column = Some(free_column.unwrap_or(0));
        }
    }

    log::trace!("laid out {} events", slots.len());

    slots
        .into_iter()
        .map(|slot| PositionedEvent {
            event: events[slot.source].clone(),
            column: slot.column.unwrap_or(0),
            total_columns: slot.total_columns.max(1),
        })
        .collect()
}
