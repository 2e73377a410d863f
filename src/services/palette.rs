// Card palette
// Background and accent colours per event status, as the client paints them.

use crate::models::event::EventStatus;

/// Colours for one event card: fill plus the left accent border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPalette {
    pub background: &'static str,
    pub accent: &'static str,
}

/// Palette for an event's status. Hex values are the shipped client's.
pub fn card_palette(status: EventStatus) -> CardPalette {
    match status {
        EventStatus::Cancelled => CardPalette {
            background: "#FFEBEE",
            accent: "#D32F2F",
        },
        EventStatus::Rescheduled => CardPalette {
            background: "#FFF9C4",
            accent: "#FBC02D",
        },
        EventStatus::Scheduled => CardPalette {
            background: "#589BD233",
            accent: "#589BD2",
        },
    }
}
