//! `rt-data` — the typed boundary between CSV files and the planner.
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`loader`] | `load_cities_*`, `load_graph_*`, `load_weather_*`            |
//! | [`writer`] | `LedgerCsvWriter` (daily breakdown + per-leg detail)          |
//! | [`error`]  | `DataError`, `DataResult`                                    |
//!
//! Every loader comes in two forms: `*_csv(path)` opens a file and delegates
//! to `*_reader(impl Read)`, which tests and the demo feed from in-memory
//! strings.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rt_data::{load_cities_csv, load_graph_csv, load_weather_csv};
//!
//! let cities  = load_cities_csv(Path::new("data/cities.csv"))?;
//! let graph   = load_graph_csv(Path::new("data/edges.csv"), &cities)?;
//! let weather = load_weather_csv(Path::new("data/weather_nov2025.csv"))?;
//! ```

pub mod error;
pub mod loader;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::{DataError, DataResult};
pub use loader::{
    load_cities_csv, load_cities_reader, load_graph_csv, load_graph_reader, load_weather_csv,
    load_weather_reader,
};
pub use writer::LedgerCsvWriter;
