//! Unit tests for rt-core primitives.

#[cfg(test)]
mod ids {
    use crate::CityId;

    #[test]
    fn index_roundtrip() {
        let id = CityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CityId(0) < CityId(1));
    }

    #[test]
    fn display() {
        assert_eq!(CityId(7).to_string(), "CityId(7)");
    }
}

#[cfg(test)]
mod city {
    use crate::{City, CityId, CityRef, CityTable, CoreError};

    fn table() -> CityTable {
        [
            City::new(CityId(0), "Denver", "CO", 5280.0),
            City::new(CityId(1), "Kansas City", "MO", 910.0),
            City::new(CityId(2), "Springfield", "IL", 597.0),
            City::new(CityId(3), "Springfield", "MO", 1300.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn lookup_by_id() {
        let t = table();
        assert_eq!(t.len(), 4);
        assert_eq!(t.name_of(CityId(1)).unwrap(), "Kansas City");
        assert_eq!(t.elevation_ft(CityId(0)).unwrap(), 5280.0);
    }

    #[test]
    fn unknown_id_is_error() {
        let err = table().get(CityId(9)).unwrap_err();
        assert!(matches!(err, CoreError::UnknownCity(CityRef::Id(CityId(9)))));
    }

    #[test]
    fn name_lookup_ignores_case_and_whitespace() {
        let t = table();
        assert_eq!(t.id_by_name("kansas city").unwrap(), CityId(1));
        assert_eq!(t.id_by_name("  DENVER\n").unwrap(), CityId(0));
    }

    #[test]
    fn duplicate_names_resolve_to_lowest_id() {
        assert_eq!(table().id_by_name("Springfield").unwrap(), CityId(2));
    }

    #[test]
    fn unknown_name_is_error() {
        let err = table().id_by_name("Atlantis").unwrap_err();
        assert!(matches!(err, CoreError::UnknownCity(CityRef::Name(ref n)) if n == "Atlantis"));
        assert_eq!(err.to_string(), "unknown city reference \"Atlantis\"");
    }

    #[test]
    fn iteration_is_id_ordered() {
        let mut t = CityTable::new();
        t.insert(City::new(CityId(2), "C", "X", 0.0));
        t.insert(City::new(CityId(0), "A", "X", 0.0));
        t.insert(City::new(CityId(1), "B", "X", 0.0));
        let ids: Vec<_> = t.ids().collect();
        assert_eq!(ids, vec![CityId(0), CityId(1), CityId(2)]);
    }
}

#[cfg(test)]
mod weather {
    use chrono::NaiveDate;

    use crate::{CityId, DEFAULT_RISK, WeatherRisk};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
    }

    #[test]
    fn missing_entry_is_default() {
        let w = WeatherRisk::new();
        assert_eq!(w.risk(CityId(0), d(1)), DEFAULT_RISK);
    }

    #[test]
    fn recorded_entry_is_returned() {
        let mut w = WeatherRisk::new();
        w.insert(CityId(3), d(5), 4.5);
        assert_eq!(w.risk(CityId(3), d(5)), 4.5);
        assert_eq!(w.risk(CityId(3), d(6)), DEFAULT_RISK);
    }

    #[test]
    fn average_mixes_recorded_and_default() {
        let w: WeatherRisk = [(CityId(0), d(1), 3.0)].into_iter().collect();
        assert_eq!(w.average(CityId(0), CityId(1), d(1)), 2.0);
    }
}

#[cfg(test)]
mod calendar {
    use chrono::NaiveDate;

    use crate::{DateWindow, next_day};

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn days_are_inclusive_and_ascending() {
        let w = DateWindow::new(d(11, 28), d(12, 2));
        let days: Vec<_> = w.days().collect();
        assert_eq!(days, vec![d(11, 28), d(11, 29), d(11, 30), d(12, 1), d(12, 2)]);
        assert_eq!(w.len_days(), 5);
    }

    #[test]
    fn inverted_window_is_empty() {
        let w = DateWindow::new(d(11, 2), d(11, 1));
        assert!(w.is_empty());
        assert_eq!(w.len_days(), 0);
        assert_eq!(w.days().count(), 0);
    }

    #[test]
    fn contains_bounds() {
        let w = DateWindow::new(d(11, 1), d(11, 30));
        assert!(w.contains(d(11, 1)));
        assert!(w.contains(d(11, 30)));
        assert!(!w.contains(d(12, 1)));
    }

    #[test]
    fn next_day_crosses_month() {
        assert_eq!(next_day(d(11, 30)).unwrap(), d(12, 1));
        assert!(next_day(NaiveDate::MAX).is_err());
    }
}

#[cfg(test)]
mod config {
    use crate::{BASE_MPG, MAX_HOURS_PER_DAY, MAX_SPEED_MPH, TripConfig};

    #[test]
    fn defaults_match_constants() {
        let c = TripConfig::default();
        assert_eq!(c.base_mpg, BASE_MPG);
        assert_eq!(c.max_speed_mph, MAX_SPEED_MPH);
        assert_eq!(c.max_hours_per_day, MAX_HOURS_PER_DAY);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_speed_rejected() {
        let c = TripConfig { max_speed_mph: 0.0, ..TripConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn nan_hours_rejected() {
        let c = TripConfig { max_hours_per_day: f64::NAN, ..TripConfig::default() };
        assert!(c.validate().is_err());
    }
}
