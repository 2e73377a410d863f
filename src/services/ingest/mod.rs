// Feed ingest
// Turns the portal's raw calendar feed into per-day event buckets ready for
// layout. This is the caller-side boundary the layout engine relies on:
// negative durations are filtered here, never inside the engine.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::event::{DayEvent, EventStatus, MINUTES_PER_DAY};
use crate::models::feed::{CalendarFeed, FeedEvent};
use crate::utils::date::{day_key, minutes_from_midnight};

/// Events grouped by local calendar date, in feed order within each day.
pub type DayBuckets = BTreeMap<NaiveDate, Vec<DayEvent>>;

/// Parse the calendar endpoint's response body.
pub fn parse_feed(body: &str) -> Result<CalendarFeed> {
    serde_json::from_str(body).context("Failed to parse calendar feed body")
}

/// Bucket feed records by the local date they start on.
///
/// Records whose end precedes their start are dropped with a warning, as
/// the client has always done, and so are spans longer than a day;
/// everything downstream may assume durations in `0..=1440`. Ids are
/// `YYYY-MM-DD-<feed index>` to match the ids the client generates.
pub fn bucket_events(feed: &CalendarFeed) -> Result<DayBuckets> {
    let mut buckets = DayBuckets::new();

    for (index, record) in feed.events.iter().enumerate() {
        let starts_at = parse_timestamp(&record.event_start_date)
            .with_context(|| format!("Bad start timestamp in feed record {}", index))?;
        let ends_at = parse_timestamp(&record.event_end_date)
            .with_context(|| format!("Bad end timestamp in feed record {}", index))?;

        let duration_minutes = (ends_at - starts_at).num_minutes();
        if duration_minutes < 0 {
            log::warn!(
                "Dropping feed record {} ({:?}): ends {} before it starts",
                index,
                record.title,
                ends_at
            );
            continue;
        }
        if duration_minutes > i64::from(MINUTES_PER_DAY) {
            log::warn!(
                "Dropping feed record {} ({:?}): {} minute span exceeds a day",
                index,
                record.title,
                duration_minutes
            );
            continue;
        }

        let date = starts_at.date();
        let event = to_day_event(record, index, starts_at, ends_at, duration_minutes as u32)
            .map_err(|e| anyhow::anyhow!("Invalid feed record {}: {}", index, e))?;

        buckets.entry(date).or_default().push(event);
    }

    log::debug!(
        "Bucketed {} feed records into {} days",
        feed.events.len(),
        buckets.len()
    );
    Ok(buckets)
}

fn to_day_event(
    record: &FeedEvent,
    index: usize,
    starts_at: NaiveDateTime,
    ends_at: NaiveDateTime,
    duration_minutes: u32,
) -> Result<DayEvent, String> {
    let mut builder = DayEvent::builder()
        .id(format!("{}-{}", day_key(starts_at.date()), index))
        .title(record.title.as_str())
        .start_minutes(minutes_from_midnight(starts_at.time()))
        .duration_minutes(duration_minutes)
        .status(EventStatus::from_flags(
            record.is_event_cancelled.as_deref(),
            record.is_event_rescheduled.as_deref(),
        ))
        .starts_at(starts_at)
        .ends_at(ends_at);

    if let Some(timezone) = &record.destination_timezone {
        builder = builder.timezone(timezone.as_str());
    }
    if let Some(meeting_with) = &record.meeting_with {
        builder = builder.meeting_with(meeting_with.as_str());
    }
    if let Some(attended_by) = &record.attended_by {
        builder = builder.attended_by(attended_by.as_str());
    }
    if let Some(on_behalf_of) = &record.on_behalf_of {
        builder = builder.on_behalf_of(on_behalf_of.as_str());
    }
    if let Some(notes) = &record.notes {
        builder = builder.notes(notes.as_str());
    }

    builder.build()
}

/// Accept the timestamp shapes the backend has been seen to emit: RFC 3339
/// (offset kept as wall-clock) and a few bare local formats.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }
    bail!("Unrecognised timestamp {:?}", raw)
}
