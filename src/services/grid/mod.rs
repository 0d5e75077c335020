//! Interval grid: pure mapping between wall-clock times and interval
//! indices.
//!
//! Interval `n` covers the `interval_minutes`-wide slot beginning at
//! `n * interval_minutes` minutes past midnight, so with 15-minute slots
//! interval 36 is 09:00. All inputs are structurally valid by construction;
//! nothing here can fail.

use crate::models::settings::GridSettings;

/// Stateless helper answering grid geometry questions for one
/// configuration.
#[derive(Debug, Clone)]
pub struct IntervalGrid {
    settings: GridSettings,
}

impl IntervalGrid {
    pub fn new(settings: GridSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Interval index containing the given wall-clock time.
    pub fn interval_of(&self, hour: i32, minute: i32) -> i32 {
        (hour * 60 + minute).div_euclid(self.settings.interval_minutes as i32)
    }

    /// Wall-clock `(hour, minute)` at which an interval begins.
    ///
    /// Total over the full interval axis: the data model allows runs
    /// outside the visible window, so a negative index labels into the
    /// previous day (hour -1 is 23:00 of the day before).
    pub fn label_of(&self, interval: i32) -> (i32, i32) {
        let minutes = interval * self.settings.interval_minutes as i32;
        (minutes.div_euclid(60), minutes.rem_euclid(60))
    }

    /// Slot caption, e.g. "09:15".
    pub fn format_label(&self, interval: i32) -> String {
        let (hour, minute) = self.label_of(interval);
        format!("{:02}:{:02}", hour, minute)
    }

    /// The visible scheduling window as `(first, last_exclusive)`.
    pub fn day_range(&self) -> (i32, i32) {
        (self.settings.day_start, self.settings.day_end)
    }

    /// Iterate over the intervals of the visible window.
    pub fn visible_intervals(&self) -> impl Iterator<Item = i32> {
        self.settings.day_start..self.settings.day_end
    }
}
