// Timeline settings
// Geometry knobs for the day timeline, loadable from TOML with defaults
// matching the shipped client.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Geometry of the day timeline and its horizontal event track.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Pixels per hour of timeline.
    pub hour_height: f32,
    /// First hour shown (inclusive).
    pub start_hour: u32,
    /// Last hour boundary (exclusive); events at or past it are hidden.
    pub end_hour: u32,
    /// Width of the event track, percent of the row.
    pub track_width_pct: f32,
    /// Left edge of the event track, percent of the row. The margin holds
    /// the time labels.
    pub track_left_pct: f32,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            hour_height: 70.0,
            start_hour: 0,
            end_hour: 24,
            track_width_pct: 75.0,
            track_left_pct: 20.0,
        }
    }
}

impl TimelineSettings {
    /// Parse settings from a TOML document, validating the result.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let settings: TimelineSettings =
            toml::from_str(raw).context("Failed to parse timeline settings")?;
        settings
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid timeline settings: {}", e))?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.hour_height <= 0.0 {
            return Err("hour_height must be positive".to_string());
        }
        if self.end_hour <= self.start_hour {
            return Err("end_hour must be after start_hour".to_string());
        }
        if self.end_hour > 24 {
            return Err("end_hour cannot exceed 24".to_string());
        }
        if self.track_width_pct <= 0.0 || self.track_left_pct < 0.0 {
            return Err("track geometry must be positive".to_string());
        }
        if self.track_left_pct + self.track_width_pct > 100.0 {
            return Err("track cannot extend past the row".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_client() {
        let settings = TimelineSettings::default();
        assert_eq!(settings.hour_height, 70.0);
        assert_eq!(settings.start_hour, 0);
        assert_eq!(settings.end_hour, 24);
        assert_eq!(settings.track_width_pct, 75.0);
        assert_eq!(settings.track_left_pct, 20.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial_overrides() {
        let settings = TimelineSettings::from_toml_str(
            "hour_height = 60.0\nstart_hour = 8\nend_hour = 18\n",
        )
        .unwrap();
        assert_eq!(settings.hour_height, 60.0);
        assert_eq!(settings.start_hour, 8);
        assert_eq!(settings.end_hour, 18);
        // Untouched knobs keep their defaults
        assert_eq!(settings.track_width_pct, 75.0);
    }

    #[test]
    fn test_from_toml_rejects_inverted_window() {
        let result = TimelineSettings::from_toml_str("start_hour = 18\nend_hour = 8\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_hour_height() {
        let settings = TimelineSettings {
            hour_height: 0.0,
            ..TimelineSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_track_past_row() {
        let settings = TimelineSettings {
            track_left_pct: 40.0,
            track_width_pct: 75.0,
            ..TimelineSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
