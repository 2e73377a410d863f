// Timeline geometry
// Converts column assignments into the track fractions and pixel offsets
// the renderer draws with.

use chrono::{NaiveTime, Timelike};

use super::PositionedEvent;
use crate::services::settings::TimelineSettings;

/// Pixels the auto-scroll leaves above the earliest event.
const SCROLL_MARGIN_PX: f32 = 30.0;

/// Horizontal placement of an event card, in percent of the row width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPosition {
    pub left_pct: f32,
    pub width_pct: f32,
}

/// Vertical extent of an event card, in pixels from the timeline top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardExtent {
    pub top: f32,
    pub height: f32,
}

/// Split the horizontal track between the cluster's columns.
pub fn track_position(positioned: &PositionedEvent, settings: &TimelineSettings) -> TrackPosition {
    let width_pct = settings.track_width_pct / positioned.total_columns as f32;
    TrackPosition {
        left_pct: settings.track_left_pct + positioned.column as f32 * width_pct,
        width_pct,
    }
}

/// Vertical pixel extent of an event, or `None` when it starts outside the
/// timeline window and should not be drawn.
pub fn card_extent(positioned: &PositionedEvent, settings: &TimelineSettings) -> Option<CardExtent> {
    let top = offset_for_minutes(positioned.event.start_minutes, settings)?;
    let height = positioned.event.duration_minutes as f32 / 60.0 * settings.hour_height;
    Some(CardExtent { top, height })
}

/// Y offset the agenda scrolls to so the earliest visible event sits just
/// below the top edge. `None` when nothing is visible.
pub fn scroll_anchor(positioned: &[PositionedEvent], settings: &TimelineSettings) -> Option<f32> {
    positioned
        .iter()
        .find_map(|p| offset_for_minutes(p.event.start_minutes, settings))
        .map(|top| (top - SCROLL_MARGIN_PX).max(0.0))
}

/// Vertical offset of the live time indicator for the given instant.
/// The caller supplies `now`; the engine never reads the system clock.
pub fn time_indicator_offset(now: NaiveTime, settings: &TimelineSettings) -> Option<f32> {
    offset_for_minutes(now.hour() * 60 + now.minute(), settings)
}

fn offset_for_minutes(minutes_from_midnight: u32, settings: &TimelineSettings) -> Option<f32> {
    let window_start = settings.start_hour * 60;
    let window_end = settings.end_hour * 60;
    if minutes_from_midnight < window_start || minutes_from_midnight >= window_end {
        return None;
    }
    Some((minutes_from_midnight - window_start) as f32 / 60.0 * settings.hour_height)
}
