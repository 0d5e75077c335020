//! Grid configuration for the daily schedule.
//!
//! The reference configuration divides the day into 15-minute intervals and
//! shows the window [36, 76), i.e. 09:00–19:00. The window bound is a
//! presentation choice; the schedule data itself is not bounded by it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the interval grid and duration defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Width of one interval in minutes.
    pub interval_minutes: u32,
    /// First visible interval of the day.
    pub day_start: i32,
    /// One past the last visible interval of the day.
    pub day_end: i32,
    /// Duration of a block with no category and no marker.
    pub default_intervals: u32,
    /// Duration of a carry-over block, regardless of category.
    pub carry_over_intervals: u32,
    /// Reserved label prefix marking an open-ended carry-over task.
    pub carry_over_marker: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            interval_minutes: 15,
            day_start: 36,
            day_end: 76,
            default_intervals: 4,
            carry_over_intervals: 9,
            carry_over_marker: ">>".to_string(),
        }
    }
}

impl GridSettings {
    /// Parse settings from a TOML document, filling omitted fields with the
    /// reference configuration.
    pub fn from_toml(input: &str) -> Result<Self, SettingsError> {
        let settings: GridSettings = toml::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.interval_minutes == 0 || 60 % self.interval_minutes != 0 {
            return Err(SettingsError::InvalidIntervalWidth(self.interval_minutes));
        }
        if self.day_start >= self.day_end {
            return Err(SettingsError::EmptyWindow {
                start: self.day_start,
                end: self.day_end,
            });
        }
        if self.default_intervals == 0 || self.carry_over_intervals == 0 {
            return Err(SettingsError::ZeroDuration);
        }
        if self.carry_over_marker.trim().is_empty() {
            return Err(SettingsError::EmptyMarker);
        }
        Ok(())
    }
}

/// Errors raised while loading or validating grid settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("interval width must be a positive divisor of 60, got {0}")]
    InvalidIntervalWidth(u32),
    #[error("day window [{start}, {end}) is empty")]
    EmptyWindow { start: i32, end: i32 },
    #[error("default durations must be at least one interval")]
    ZeroDuration,
    #[error("carry-over marker cannot be empty")]
    EmptyMarker,
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}
