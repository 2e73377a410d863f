// Feed module
// Wire model for the portal's calendar endpoint response body

use serde::Deserialize;

/// Response body of the calendar endpoint: `{ "lst_events": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarFeed {
    #[serde(default, rename = "lst_events")]
    pub events: Vec<FeedEvent>,
}

/// One raw event record as the backend sends it. Field names follow the
/// backend's spelling, typos included.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEvent {
    pub title: String,
    pub event_start_date: String,
    pub event_end_date: String,
    #[serde(default)]
    pub destination_timezone: Option<String>,
    #[serde(default, rename = "metting_with")]
    pub meeting_with: Option<String>,
    #[serde(default, rename = "metting_attended_by")]
    pub attended_by: Option<String>,
    #[serde(default, rename = "meeting_attend_on_behalf_client")]
    pub on_behalf_of: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_event_cancelled: Option<String>,
    #[serde(default)]
    pub is_event_rescheduled: Option<String>,
}
