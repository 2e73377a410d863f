// Event module
// A single scheduled meeting on one calendar day, timed in minutes from midnight

use chrono::NaiveDateTime;

/// Minutes in a calendar day; `start_minutes` must stay below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Scheduling status of a meeting, derived from the portal's Yes/No flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Scheduled,
    Cancelled,
    Rescheduled,
}

impl EventStatus {
    /// Derive the status from the feed's `is_event_cancelled` /
    /// `is_event_rescheduled` flags. Matching is case-insensitive and
    /// cancellation wins over rescheduling.
    pub fn from_flags(cancelled: Option<&str>, rescheduled: Option<&str>) -> Self {
        let is_yes = |flag: Option<&str>| {
            flag.map(|v| v.trim().eq_ignore_ascii_case("yes"))
                .unwrap_or(false)
        };

        if is_yes(cancelled) {
            EventStatus::Cancelled
        } else if is_yes(rescheduled) {
            EventStatus::Rescheduled
        } else {
            EventStatus::Scheduled
        }
    }

    /// Prefix shown before the event title on its card.
    pub fn title_prefix(&self) -> &'static str {
        match self {
            EventStatus::Cancelled => "Cancelled-",
            EventStatus::Rescheduled => "Rescheduled-",
            EventStatus::Scheduled => "",
        }
    }
}

/// One meeting on a specific calendar day.
///
/// Times are minutes from midnight; the layout engine only ever looks at
/// `start_minutes` and `duration_minutes`. The wall-clock timestamps and
/// meeting metadata are carried along for detail display.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEvent {
    pub id: String,
    pub title: String,
    pub start_minutes: u32,
    pub duration_minutes: u32,
    pub status: EventStatus,
    pub starts_at: Option<NaiveDateTime>,
    pub ends_at: Option<NaiveDateTime>,
    pub timezone: Option<String>,
    pub meeting_with: Option<String>,
    pub attended_by: Option<String>,
    pub on_behalf_of: Option<String>,
    pub notes: Option<String>,
}

impl DayEvent {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Caller-supplied opaque identifier
    /// * `title` - Event title (required, non-empty)
    /// * `start_minutes` - Start time as minutes from midnight (0-1439)
    /// * `duration_minutes` - Length of the meeting (zero allowed, at most
    ///   one day)
    ///
    /// # Returns
    /// Returns `Result<DayEvent, String>` with validation
    ///
    /// # Examples
    /// ```
    /// use agenda_grid::models::event::DayEvent;
    ///
    /// let event = DayEvent::new("d1", "Case review", 9 * 60, 60).unwrap();
    /// assert_eq!(event.end_minutes(), 10 * 60);
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_minutes: u32,
        duration_minutes: u32,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start_minutes,
            duration_minutes,
            status: EventStatus::Scheduled,
            starts_at: None,
            ends_at: None,
            timezone: None,
            meeting_with: None,
            attended_by: None,
            on_behalf_of: None,
            notes: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> DayEventBuilder {
        DayEventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.start_minutes >= MINUTES_PER_DAY {
            return Err(format!(
                "Event start must be a valid minute of day (got {})",
                self.start_minutes
            ));
        }

        if self.duration_minutes > MINUTES_PER_DAY {
            return Err(format!(
                "Event duration cannot exceed one day (got {} minutes)",
                self.duration_minutes
            ));
        }

        Ok(())
    }

    /// End time as minutes from midnight. May run past 1439 for meetings
    /// spilling over midnight; the timeline clips those visually. Validation
    /// caps both fields at a day each, so the sum never overflows.
    pub fn end_minutes(&self) -> u32 {
        self.start_minutes + self.duration_minutes
    }

    /// True pairwise overlap on the half-open interval `[start, end)`.
    /// A zero-duration event never overlaps itself or anything sharing its
    /// boundary, but it does overlap an event whose interval strictly
    /// contains its instant.
    pub fn overlaps(&self, other: &DayEvent) -> bool {
        self.start_minutes < other.end_minutes() && self.end_minutes() > other.start_minutes
    }
}

/// Builder for creating events with optional fields
pub struct DayEventBuilder {
    id: Option<String>,
    title: Option<String>,
    start_minutes: Option<u32>,
    duration_minutes: u32,
    status: EventStatus,
    starts_at: Option<NaiveDateTime>,
    ends_at: Option<NaiveDateTime>,
    timezone: Option<String>,
    meeting_with: Option<String>,
    attended_by: Option<String>,
    on_behalf_of: Option<String>,
    notes: Option<String>,
}

impl DayEventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            start_minutes: None,
            duration_minutes: 0,
            status: EventStatus::Scheduled,
            starts_at: None,
            ends_at: None,
            timezone: None,
            meeting_with: None,
            attended_by: None,
            on_behalf_of: None,
            notes: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start_minutes(mut self, start_minutes: u32) -> Self {
        self.start_minutes = Some(start_minutes);
        self
    }

    pub fn duration_minutes(mut self, duration_minutes: u32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub fn starts_at(mut self, starts_at: NaiveDateTime) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    pub fn ends_at(mut self, ends_at: NaiveDateTime) -> Self {
        self.ends_at = Some(ends_at);
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn meeting_with(mut self, meeting_with: impl Into<String>) -> Self {
        self.meeting_with = Some(meeting_with.into());
        self
    }

    pub fn attended_by(mut self, attended_by: impl Into<String>) -> Self {
        self.attended_by = Some(attended_by.into());
        self
    }

    pub fn on_behalf_of(mut self, on_behalf_of: impl Into<String>) -> Self {
        self.on_behalf_of = Some(on_behalf_of.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<DayEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start_minutes = self.start_minutes.ok_or("Event start time is required")?;

        let event = DayEvent {
            id,
            title,
            start_minutes,
            duration_minutes: self.duration_minutes,
            status: self.status,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            timezone: self.timezone,
            meeting_with: self.meeting_with,
            attended_by: self.attended_by,
            on_behalf_of: self.on_behalf_of,
            notes: self.notes,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for DayEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
