// Agenda Grid demo
// Runs a sample feed through ingest and layout, then prints the day as a
// text timeline.

use anyhow::{Context, Result};

use agenda_grid::models::event::MINUTES_PER_DAY;
use agenda_grid::services::ingest::{bucket_events, parse_feed};
use agenda_grid::services::layout::geometry::{card_extent, scroll_anchor, track_position};
use agenda_grid::services::layout::layout;
use agenda_grid::services::palette::card_palette;
use agenda_grid::services::settings::TimelineSettings;

const SAMPLE_FEED: &str = r#"{
    "lst_events": [
        {"title": "Case status review", "event_start_date": "2026-03-02T09:00:00",
         "event_end_date": "2026-03-02T10:00:00", "metting_with": "A. Benka"},
        {"title": "Discovery call", "event_start_date": "2026-03-02T09:30:00",
         "event_end_date": "2026-03-02T10:30:00"},
        {"title": "Filing deadline check", "event_start_date": "2026-03-02T10:15:00",
         "event_end_date": "2026-03-02T11:00:00"},
        {"title": "Client consultation", "event_start_date": "2026-03-02T14:00:00",
         "event_end_date": "2026-03-02T15:30:00", "is_event_rescheduled": "Yes"}
    ]
}"#;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Starting agenda-grid demo");

    let settings = TimelineSettings::default();
    let feed = parse_feed(SAMPLE_FEED)?;
    let buckets = bucket_events(&feed)?;
    let (date, events) = buckets
        .iter()
        .next()
        .context("Sample feed produced no days")?;

    let positioned = layout(events);

    let hhmm = |minutes: u32| format!("{:02}:{:02}", minutes / 60, minutes % 60);

    println!("Agenda for {}", date);
    for p in &positioned {
        let track = track_position(p, &settings);
        let palette = card_palette(p.event.status);
        let end = p.event.end_minutes().min(MINUTES_PER_DAY - 1);
        let card = card_extent(p, &settings);

        print!(
            "  {} - {}  [col {}/{}]  {}{}",
            hhmm(p.event.start_minutes),
            hhmm(end),
            p.column + 1,
            p.total_columns,
            p.event.status.title_prefix(),
            p.event.title,
        );
        if let Some(extent) = card {
            print!(
                "  (left {:.1}%, width {:.1}%, top {:.0}px, height {:.0}px, fill {})",
                track.left_pct, track.width_pct, extent.top, extent.height, palette.background
            );
        }
        println!();
    }

    if let Some(anchor) = scroll_anchor(&positioned, &settings) {
        println!("Scroll to y = {:.0}px", anchor);
    }

    Ok(())
}
