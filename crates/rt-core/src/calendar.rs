//! Calendar window for start-date searches.
//!
//! Dates are plain `chrono::NaiveDate`s: the planner only ever advances by
//! whole days, so no time-of-day or timezone is modelled.

use std::fmt;

use chrono::NaiveDate;

use crate::{CoreError, CoreResult};

/// The calendar day after `date`.
#[inline]
pub fn next_day(date: NaiveDate) -> CoreResult<NaiveDate> {
    date.succ_opt().ok_or(CoreError::DateOverflow(date))
}

/// An inclusive range of calendar dates, `start..=end`.
///
/// A window with `start > end` is valid but empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end:   NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Every date in the window, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of dates in the window (0 when empty).
    pub fn len_days(&self) -> u64 {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start).num_days() as u64 + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
