// Date utility functions

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

/// Bucket key in `YYYY-MM-DD` form, also the id prefix for ingested events.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Minutes from midnight for a wall-clock time. Seconds are dropped.
pub fn minutes_from_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parse an `HH:MM` string into minutes from midnight.
pub fn parse_hhmm(raw: &str) -> Option<u32> {
    let (hours, minutes) = raw.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Timeline hour label in the client's style: "12 am", "1 am", ... "11 pm".
pub fn hour_label(hour: u32) -> String {
    let meridiem = if hour < 12 { "am" } else { "pm" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", display, meridiem)
}

/// Detail-view timestamp in the client's format, e.g. "02-Mar-2026 09:30 AM".
pub fn format_full_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%d-%b-%Y %I:%M %p").to_string()
}
