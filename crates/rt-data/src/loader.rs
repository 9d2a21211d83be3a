//! CSV loaders for the three input tables.
//!
//! # CSV formats
//!
//! Headers are required; column order does not matter.
//!
//! ```csv
//! city_id,city_name,state,sea_level_ft
//! 0,Denver,CO,5280
//! 1,Kansas City,MO,910
//! ```
//!
//! ```csv
//! from_id,to_id,map_distance_miles
//! 0,1,605.2
//! ```
//!
//! Every edge row is added in both directions.  Endpoints must be cities of
//! the already-loaded table, and the graph has one vertex per city, so city
//! ids are expected to run densely from 0.
//!
//! ```csv
//! city_id,date,condition,risk
//! 0,2025-11-01,Sunny,1
//! 0,2025-11-02,Snow,4.5
//! ```
//!
//! `condition` is optional and ignored, as is any other extra column.  Missing `(city, date)`
//! entries score [`DEFAULT_RISK`](rt_core::DEFAULT_RISK) at lookup time.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use rt_core::{City, CityId, CityRef, CityTable, CoreError, NaiveDate, WeatherRisk};
use rt_graph::Graph;

use crate::{DataError, DataResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CityRecord {
    city_id:      u32,
    city_name:    String,
    state:        String,
    sea_level_ft: f64,
}

#[derive(Deserialize)]
struct EdgeRecord {
    from_id:            u32,
    to_id:              u32,
    map_distance_miles: f64,
}

#[derive(Deserialize)]
struct WeatherRecord {
    city_id: u32,
    date:    String,
    risk:    f64,
}

// ── Cities ────────────────────────────────────────────────────────────────────

/// Load the city table from a CSV file.
pub fn load_cities_csv(path: &Path) -> DataResult<CityTable> {
    let file = std::fs::File::open(path)?;
    load_cities_reader(file)
}

/// Like [`load_cities_csv`] but accepts any `Read` source.
///
/// A repeated `city_id` replaces the earlier row.
pub fn load_cities_reader<R: Read>(reader: R) -> DataResult<CityTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut cities = CityTable::new();

    for result in csv_reader.deserialize::<CityRecord>() {
        let row = result.map_err(|e| DataError::Parse(e.to_string()))?;
        cities.insert(City::new(
            CityId(row.city_id),
            row.city_name.trim(),
            row.state.trim(),
            row.sea_level_ft,
        ));
    }

    debug!(cities = cities.len(), "city table loaded");
    Ok(cities)
}

// ── Roads ─────────────────────────────────────────────────────────────────────

/// Load the road graph from a CSV file.
pub fn load_graph_csv(path: &Path, cities: &CityTable) -> DataResult<Graph> {
    let file = std::fs::File::open(path)?;
    load_graph_reader(file, cities)
}

/// Like [`load_graph_csv`] but accepts any `Read` source.
///
/// Fails with [`CoreError::UnknownCity`] when an endpoint is not in
/// `cities`, and with a graph range error when an id is not below
/// `cities.len()`.
pub fn load_graph_reader<R: Read>(reader: R, cities: &CityTable) -> DataResult<Graph> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut graph = Graph::new(cities.len());

    for result in csv_reader.deserialize::<EdgeRecord>() {
        let row = result.map_err(|e| DataError::Parse(e.to_string()))?;
        let (from, to) = (CityId(row.from_id), CityId(row.to_id));
        for id in [from, to] {
            if !cities.contains(id) {
                return Err(CoreError::UnknownCity(CityRef::Id(id)).into());
            }
        }
        graph.add_road(from, to, row.map_distance_miles)?;
    }

    debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "road graph loaded");
    Ok(graph)
}

// ── Weather ───────────────────────────────────────────────────────────────────

/// Load the weather-risk table from a CSV file.
pub fn load_weather_csv(path: &Path) -> DataResult<WeatherRisk> {
    let file = std::fs::File::open(path)?;
    load_weather_reader(file)
}

/// Like [`load_weather_csv`] but accepts any `Read` source.
///
/// `date` must be ISO `YYYY-MM-DD`.  A repeated `(city_id, date)` pair
/// replaces the earlier row.
pub fn load_weather_reader<R: Read>(reader: R) -> DataResult<WeatherRisk> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut weather = WeatherRisk::new();

    for result in csv_reader.deserialize::<WeatherRecord>() {
        let row = result.map_err(|e| DataError::Parse(e.to_string()))?;
        weather.insert(CityId(row.city_id), parse_date(&row.date)?, row.risk);
    }

    debug!(entries = weather.len(), "weather risk loaded");
    Ok(weather)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_date(s: &str) -> DataResult<NaiveDate> {
    s.trim()
        .parse::<NaiveDate>()
        .map_err(|e| DataError::Parse(format!("invalid date {s:?}: {e}")))
}
