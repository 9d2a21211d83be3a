//! CSV export of simulated trips.
//!
//! Creates two files in the target directory, prefixed by a caller-chosen
//! stem so several routes can share one directory:
//! - `{stem}_days.csv`: one row per calendar date
//! - `{stem}_legs.csv`: one row per route pair

use std::fs::File;
use std::path::Path;

use csv::Writer;

use rt_planner::{DayLedger, LegSummary, TripResult};

use crate::DataResult;

pub const DAY_HEADERS: [&str; 6] = ["date", "hours", "distance_miles", "fuel_gallons", "mpg", "risk"];

pub const LEG_HEADERS: [&str; 9] = [
    "from",
    "to",
    "map_distance_miles",
    "fallback",
    "real_distance_miles",
    "slope",
    "mpg",
    "fuel_gallons",
    "hours",
];

/// Writes trip ledgers to a pair of CSV files.
pub struct LedgerCsvWriter {
    days:     Writer<File>,
    legs:     Writer<File>,
    finished: bool,
}

impl LedgerCsvWriter {
    /// Create (or truncate) `{stem}_days.csv` and `{stem}_legs.csv` in `dir`
    /// and write the header rows.  `dir` must already exist.
    pub fn new(dir: &Path, stem: &str) -> DataResult<Self> {
        let mut days = Writer::from_path(dir.join(format!("{stem}_days.csv")))?;
        days.write_record(DAY_HEADERS)?;

        let mut legs = Writer::from_path(dir.join(format!("{stem}_legs.csv")))?;
        legs.write_record(LEG_HEADERS)?;

        Ok(Self { days, legs, finished: false })
    }

    /// Append every day and leg of `trip`.
    pub fn write_trip(&mut self, trip: &TripResult) -> DataResult<()> {
        self.write_days(&trip.days)?;
        self.write_legs(&trip.legs)
    }

    pub fn write_days(&mut self, rows: &[DayLedger]) -> DataResult<()> {
        for day in rows {
            self.days.write_record(&[
                day.date.to_string(),
                day.hours.to_string(),
                day.distance_miles.to_string(),
                day.fuel_gallons.to_string(),
                // Undefined MPG is an empty cell, never 0.
                day.mpg.map(|m| m.to_string()).unwrap_or_default(),
                day.risk.to_string(),
            ])?;
        }
        Ok(())
    }

    pub fn write_legs(&mut self, rows: &[LegSummary]) -> DataResult<()> {
        for leg in rows {
            self.legs.write_record(&[
                leg.from.0.to_string(),
                leg.to.0.to_string(),
                leg.map_distance_miles.to_string(),
                (leg.via_fallback as u8).to_string(),
                leg.real_distance_miles.to_string(),
                leg.slope.to_string(),
                leg.mpg.to_string(),
                leg.fuel_gallons.to_string(),
                leg.hours.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Flush both files.  Further calls are no-ops.
    pub fn finish(&mut self) -> DataResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.days.flush()?;
        self.legs.flush()?;
        Ok(())
    }
}
