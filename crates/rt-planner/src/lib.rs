//! `rt-planner` — trip simulation over a city graph.
//!
//! # Pipeline
//!
//! ```text
//! route pair (u, v)
//!   ① Map distance:   first direct edge u→v, else Router fallback
//!   ② Distance model: real distance + slope from elevations, slope-adjusted MPG
//!   ③ Day splitting:  fill the current day up to the hour cap, close it,
//!                     carry the residual onto the next calendar date
//! after the last pair: close the in-progress day
//! ```
//!
//! The start-date search repeats the simulation for every date of a
//! [`DateWindow`](rt_core::DateWindow) and keeps the lowest-risk trip that
//! finishes inside the window (earliest date wins ties).
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the candidate simulations on Rayon's thread pool. |
//! | `serde`    | Derives `Serialize`/`Deserialize` on result types.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rt_core::DateWindow;
//! use rt_planner::TripPlanner;
//!
//! let planner = TripPlanner::new(&cities, &graph, &weather);
//! let (date, trip) = planner.best_travel_date(&route, DateWindow::new(nov_1, nov_30))?;
//! println!("leave on {date}: {:.1} mi, risk {:.2}", trip.total_distance_miles, trip.total_risk);
//! ```

pub mod distance;
pub mod error;
pub mod ledger;
pub mod planner;
pub mod search;
pub mod simulator;


pub use distance::{RealDistance, adjusted_mpg, real_distance};
pub use error::{PlannerError, PlannerResult};
pub use ledger::{DayLedger, LegSummary, TripResult};
pub use planner::{TripPlanner, best_travel_date, simulate_trip};
