//! `rt-core` — foundational types for the roadtrip planner.
//!
//! This crate is a dependency of every other `rt-*` crate.  It has no `rt-*`
//! dependencies and only a few external ones (`chrono`, `rustc-hash`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CityId`                                              |
//! | [`city`]        | `City`, `CityTable`                                   |
//! | [`weather`]     | `WeatherRisk`, `DEFAULT_RISK`                         |
//! | [`calendar`]    | `DateWindow`, `next_day`                              |
//! | [`config`]      | `TripConfig` and the default parameter constants      |
//! | [`error`]       | `CoreError`, `CoreResult`, `CityRef`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the value types.          |

pub mod calendar;
pub mod city;
pub mod config;
pub mod error;
pub mod ids;
pub mod weather;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use calendar::{DateWindow, next_day};
pub use chrono::NaiveDate;
pub use city::{City, CityTable};
pub use config::{BASE_MPG, FEET_PER_MILE, MAX_HOURS_PER_DAY, MAX_SPEED_MPH, TripConfig};
pub use error::{CityRef, CoreError, CoreResult};
pub use ids::CityId;
pub use weather::{DEFAULT_RISK, WeatherRisk};
