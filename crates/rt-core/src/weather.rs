//! Sparse per-city, per-date weather risk.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::CityId;

/// Risk returned for any `(city, date)` pair with no recorded score.
pub const DEFAULT_RISK: f64 = 1.0;

/// Mapping from `(city, date)` to a unitless risk score.
///
/// Lookups never fail: a miss resolves to [`DEFAULT_RISK`].
#[derive(Clone, Debug, Default)]
pub struct WeatherRisk {
    scores: FxHashMap<(CityId, NaiveDate), f64>,
}

impl WeatherRisk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the score for `city` on `date`, overwriting any earlier value.
    pub fn insert(&mut self, city: CityId, date: NaiveDate, risk: f64) {
        self.scores.insert((city, date), risk);
    }

    #[inline]
    pub fn risk(&self, city: CityId, date: NaiveDate) -> f64 {
        self.scores.get(&(city, date)).copied().unwrap_or(DEFAULT_RISK)
    }

    /// Mean of the two endpoint lookups on `date`: the risk charged for
    /// driving between `a` and `b` that day.
    #[inline]
    pub fn average(&self, a: CityId, b: CityId, date: NaiveDate) -> f64 {
        (self.risk(a, date) + self.risk(b, date)) / 2.0
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(CityId, NaiveDate, f64)> for WeatherRisk {
    fn from_iter<I: IntoIterator<Item = (CityId, NaiveDate, f64)>>(iter: I) -> Self {
        let mut table = WeatherRisk::new();
        for (city, date, risk) in iter {
            table.insert(city, date, risk);
        }
        table
    }
}
