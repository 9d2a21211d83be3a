//! Trip simulation parameters.
//!
//! The three constants below are the defaults; every planner entry point
//! takes a [`TripConfig`] so applications can override any of them.

use crate::{CoreError, CoreResult};

/// Fuel economy on level ground, miles per gallon.
pub const BASE_MPG: f64 = 45.0;

/// Fixed road speed, miles per hour.
pub const MAX_SPEED_MPH: f64 = 75.0;

/// Daily driving-hour cap.
pub const MAX_HOURS_PER_DAY: f64 = 8.0;

/// Converts elevation deltas (feet) into the miles used by the slope model.
pub const FEET_PER_MILE: f64 = 5280.0;

/// Parameters of the distance model and the day-splitting simulator.
///
/// Typically built with `TripConfig::default()` or deserialized from a
/// JSON/TOML file by the application crate (feature `serde`).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TripConfig {
    /// MPG with zero elevation change.
    pub base_mpg: f64,

    /// Constant driving speed; converts real distance into hours.
    pub max_speed_mph: f64,

    /// Hours after which the current day is closed and driving resumes on
    /// the next calendar date.
    pub max_hours_per_day: f64,
}

impl TripConfig {
    /// Reject parameters that would make the simulator divide by zero or
    /// loop forever.
    pub fn validate(&self) -> CoreResult<()> {
        let checks = [
            ("base_mpg", self.base_mpg),
            ("max_speed_mph", self.max_speed_mph),
            ("max_hours_per_day", self.max_hours_per_day),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            base_mpg:          BASE_MPG,
            max_speed_mph:     MAX_SPEED_MPH,
            max_hours_per_day: MAX_HOURS_PER_DAY,
        }
    }
}
