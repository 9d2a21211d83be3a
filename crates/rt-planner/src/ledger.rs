//! Per-day and per-leg records produced by the trip simulator.
//!
//! All records are built incrementally by the simulator and never mutated
//! once returned.

use rt_core::{CityId, NaiveDate};

/// One calendar date of driving.
///
/// `hours` equals the daily cap for every day that was closed because the
/// next leg overflowed it; only the final day may be shorter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayLedger {
    pub date:           NaiveDate,
    pub hours:          f64,
    pub distance_miles: f64,
    pub fuel_gallons:   f64,
    /// `distance / fuel`; `None` when no fuel was burned that day.
    pub mpg:            Option<f64>,
    pub risk:           f64,
}

/// One consecutive `(from, to)` pair of the route, before day splitting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegSummary {
    pub from:                CityId,
    pub to:                  CityId,
    /// Direct-edge weight, or the shortest-path distance when no direct
    /// edge exists.
    pub map_distance_miles:  f64,
    pub via_fallback:        bool,
    pub real_distance_miles: f64,
    pub slope:               f64,
    pub mpg:                 f64,
    pub fuel_gallons:        f64,
    pub hours:               f64,
}

/// Outcome of simulating a route from one start date.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripResult {
    pub start_date:           NaiveDate,
    /// Date in effect when the last leg finished.
    pub end_date:             NaiveDate,
    pub total_distance_miles: f64,
    pub total_fuel_gallons:   f64,
    /// Raw driving time of all legs (not cap-adjusted).
    pub total_hours:          f64,
    /// Sum of every day's risk.
    pub total_risk:           f64,
    /// `total_distance / total_fuel`; `None` when no fuel was burned.
    pub overall_mpg:          Option<f64>,
    pub legs:                 Vec<LegSummary>,
    pub days:                 Vec<DayLedger>,
}

impl TripResult {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Calendar days from start to end, inclusive of both.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// `distance / fuel`, undefined for zero (or negative) fuel.
pub(crate) fn mpg_of(distance_miles: f64, fuel_gallons: f64) -> Option<f64> {
    (fuel_gallons > 0.0).then(|| distance_miles / fuel_gallons)
}
