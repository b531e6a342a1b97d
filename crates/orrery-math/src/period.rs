//! Conversion of real rotation and revolution periods into on-screen durations.

use serde::{Deserialize, Serialize};

/// Hours in one Earth day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Days in one (calendar) Earth year, as used for the screen-time scale.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// How much screen time one Earth year and one Earth day take.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeScale {
    /// Screen seconds for one 365-day revolution.
    pub seconds_per_year: f64,
    /// Screen seconds for one 24-hour rotation.
    pub seconds_per_day: f64,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            seconds_per_year: 8.0,
            seconds_per_day: 1.0,
        }
    }
}

impl TimeScale {
    /// Screen seconds for an orbital period given in days.
    pub fn year_seconds(&self, year_length_days: f64) -> f64 {
        year_length_days * self.seconds_per_year / DAYS_PER_YEAR
    }

    /// Screen seconds for a rotation period given in hours.
    pub fn day_seconds(&self, day_length_hours: f64) -> f64 {
        day_length_hours * self.seconds_per_day / HOURS_PER_DAY
    }
}
