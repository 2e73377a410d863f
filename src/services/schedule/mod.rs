// Month schedule
// Per-date event store backing the month grid and the selected-day agenda.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::event::DayEvent;
use crate::services::ingest::DayBuckets;

/// Cells in the month grid: six full weeks.
pub const GRID_CELLS: usize = 42;

/// Events keyed by local date, each day's list sorted by start time.
///
/// Refetching a month replaces the entries for the dates it covers and
/// leaves other cached dates alone, matching the client's merge-on-fetch.
#[derive(Debug, Clone, Default)]
pub struct MonthSchedule {
    buckets: DayBuckets,
}

impl MonthSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge freshly ingested buckets, overwriting any date they cover.
    pub fn merge(&mut self, buckets: DayBuckets) {
        for (date, mut events) in buckets {
            events.sort_by_key(|e| e.start_minutes);
            self.buckets.insert(date, events);
        }
    }

    /// Events for one day, sorted by start time. Empty for unknown dates.
    pub fn events_for(&self, date: NaiveDate) -> &[DayEvent] {
        self.buckets.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the month grid should show the event dot for this date.
    pub fn has_events(&self, date: NaiveDate) -> bool {
        !self.events_for(date).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// The 42-cell month grid the calendar header renders: leading days back to
/// Sunday, the month itself, then trailing days padding out six weeks.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let leading = first_of_month.weekday().num_days_from_sunday() as u64;

    let mut grid = Vec::with_capacity(GRID_CELLS);
    let mut cursor = first_of_month.checked_sub_days(Days::new(leading))?;
    while grid.len() < GRID_CELLS {
        grid.push(cursor);
        cursor = cursor.checked_add_days(Days::new(1))?;
    }
    Some(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::collections::BTreeMap;

    fn event(id: &str, start: u32) -> DayEvent {
        DayEvent::new(id, format!("Event {id}"), start, 30).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_merge_sorts_each_day() {
        let mut schedule = MonthSchedule::new();
        let mut buckets = BTreeMap::new();
        buckets.insert(date(2026, 3, 2), vec![event("late", 600), event("early", 480)]);
        schedule.merge(buckets);

        let day = schedule.events_for(date(2026, 3, 2));
        assert_eq!(day[0].id, "early");
        assert_eq!(day[1].id, "late");
    }

    #[test]
    fn test_merge_overwrites_refetched_dates_only() {
        let mut schedule = MonthSchedule::new();

        let mut first = BTreeMap::new();
        first.insert(date(2026, 3, 2), vec![event("a", 540)]);
        first.insert(date(2026, 3, 3), vec![event("b", 540)]);
        schedule.merge(first);

        let mut refetch = BTreeMap::new();
        refetch.insert(date(2026, 3, 2), vec![event("a2", 600)]);
        schedule.merge(refetch);

        assert_eq!(schedule.events_for(date(2026, 3, 2))[0].id, "a2");
        // The other cached date is untouched
        assert_eq!(schedule.events_for(date(2026, 3, 3))[0].id, "b");
    }

    #[test]
    fn test_events_for_unknown_date_is_empty() {
        let schedule = MonthSchedule::new();
        assert!(schedule.events_for(date(2026, 3, 2)).is_empty());
        assert!(!schedule.has_events(date(2026, 3, 2)));
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_month_grid_shape() {
        // March 2026 starts on a Sunday
        let grid = month_grid(2026, 3).unwrap();
        assert_eq!(grid.len(), GRID_CELLS);
        assert_eq!(grid[0], date(2026, 3, 1));
        assert_eq!(grid[0].weekday(), Weekday::Sun);
        assert_eq!(grid[41], date(2026, 4, 11));
    }

    #[test]
    fn test_month_grid_leading_days_from_previous_month() {
        // July 2026 starts on a Wednesday: three leading June days
        let grid = month_grid(2026, 7).unwrap();
        assert_eq!(grid[0], date(2026, 6, 28));
        assert_eq!(grid[0].weekday(), Weekday::Sun);
        assert_eq!(grid[3], date(2026, 7, 1));
        assert_eq!(grid.len(), GRID_CELLS);
    }

    #[test]
    fn test_month_grid_invalid_month() {
        assert!(month_grid(2026, 13).is_none());
        assert!(month_grid(2026, 0).is_none());
    }
}
