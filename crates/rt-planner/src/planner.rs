//! The `TripPlanner` facade and the plain-function entry points.

use rt_core::{CityId, CityTable, DateWindow, NaiveDate, TripConfig, WeatherRisk};
use rt_graph::{DijkstraRouter, Graph, Router};

use crate::{PlannerResult, TripResult};

/// Read-only view of everything a simulation needs.
///
/// `TripPlanner<'a, R>` borrows the city table, graph, and weather table for
/// its whole lifetime; none of them may change while it exists.  The router
/// answers shortest-path fallbacks for route pairs with no direct edge.
///
/// | Method           | Default                      |
/// |------------------|------------------------------|
/// | `.config(c)`     | `TripConfig::default()`      |
/// | `.router(r)`     | [`DijkstraRouter`]           |
pub struct TripPlanner<'a, R: Router = DijkstraRouter> {
    pub(crate) cities:  &'a CityTable,
    pub(crate) graph:   &'a Graph,
    pub(crate) weather: &'a WeatherRisk,
    pub(crate) config:  TripConfig,
    pub(crate) router:  R,
}

impl<'a> TripPlanner<'a, DijkstraRouter> {
    pub fn new(cities: &'a CityTable, graph: &'a Graph, weather: &'a WeatherRisk) -> Self {
        Self {
            cities,
            graph,
            weather,
            config: TripConfig::default(),
            router: DijkstraRouter,
        }
    }
}

impl<'a, R: Router> TripPlanner<'a, R> {
    /// Override the speed, hour-cap, and MPG parameters.  Validated when a
    /// simulation starts.
    pub fn config(mut self, config: TripConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the shortest-path fallback.
    pub fn router<R2: Router>(self, router: R2) -> TripPlanner<'a, R2> {
        TripPlanner {
            cities:  self.cities,
            graph:   self.graph,
            weather: self.weather,
            config:  self.config,
            router,
        }
    }

    pub fn trip_config(&self) -> &TripConfig {
        &self.config
    }
}

// ── Plain-function entry points ───────────────────────────────────────────────

/// Simulate `route` from `start` with the default configuration.
pub fn simulate_trip(
    cities:  &CityTable,
    graph:   &Graph,
    weather: &WeatherRisk,
    route:   &[CityId],
    start:   NaiveDate,
) -> PlannerResult<TripResult> {
    TripPlanner::new(cities, graph, weather).simulate(route, start)
}

/// Lowest-risk start date in `start_window..=end_window` with the default
/// configuration.
pub fn best_travel_date(
    cities:       &CityTable,
    graph:        &Graph,
    weather:      &WeatherRisk,
    route:        &[CityId],
    start_window: NaiveDate,
    end_window:   NaiveDate,
) -> PlannerResult<(NaiveDate, TripResult)> {
    TripPlanner::new(cities, graph, weather)
        .best_travel_date(route, DateWindow::new(start_window, end_window))
}
