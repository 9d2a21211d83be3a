//! Day-splitting trip simulator.
//!
//! Walks a route pair by pair.  Each leg's driving time is poured into the
//! current day; when it would overflow the daily hour cap, the leg is split
//! proportionally: the share that fits closes the day, and the residual
//! distance, fuel, and time carry over to the next calendar date.  A single
//! leg may span any number of days.
//!
//! Every leg portion driven on a date adds the average of the two endpoint
//! risks *for that date* to the day's risk, so a leg split across three days
//! is charged on each of them.

use tracing::{debug, trace};

use rt_core::{CityId, NaiveDate, next_day};
use rt_graph::Router;

use crate::distance::{adjusted_mpg, real_distance};
use crate::ledger::mpg_of;
use crate::{DayLedger, LegSummary, PlannerError, PlannerResult, TripPlanner, TripResult};

// ── Day accumulator ───────────────────────────────────────────────────────────

/// Running totals for the day currently being driven.
struct OpenDay {
    date:     NaiveDate,
    hours:    f64,
    distance: f64,
    fuel:     f64,
    risk:     f64,
}

impl OpenDay {
    fn on(date: NaiveDate) -> Self {
        Self { date, hours: 0.0, distance: 0.0, fuel: 0.0, risk: 0.0 }
    }

    fn close(&self) -> DayLedger {
        DayLedger {
            date:           self.date,
            hours:          self.hours,
            distance_miles: self.distance,
            fuel_gallons:   self.fuel,
            mpg:            mpg_of(self.distance, self.fuel),
            risk:           self.risk,
        }
    }
}

/// Share of a leg not yet assigned to any day.
struct Remaining {
    miles: f64,
    fuel:  f64,
    hours: f64,
}

// ── Simulation ────────────────────────────────────────────────────────────────

impl<R: Router> TripPlanner<'_, R> {
    /// Simulate driving `route` starting on `start`.
    ///
    /// Fails if a route city is missing from the city table or graph, or if
    /// a pair without a direct edge is not connected at all.  A route with
    /// fewer than two cities yields a single empty day on `start`.
    pub fn simulate(&self, route: &[CityId], start: NaiveDate) -> PlannerResult<TripResult> {
        self.check_inputs(route)?;
        self.run(route, start)
    }

    /// Validate the configuration and resolve every route city in both the
    /// city table and the graph.
    pub(crate) fn check_inputs(&self, route: &[CityId]) -> PlannerResult<()> {
        self.config.validate()?;
        for &city in route {
            self.cities.get(city)?;
            self.graph.check_vertex(city)?;
        }
        Ok(())
    }

    /// Simulation body; inputs are already validated.
    pub(crate) fn run(&self, route: &[CityId], start: NaiveDate) -> PlannerResult<TripResult> {
        let cap = self.config.max_hours_per_day;

        let mut legs = Vec::with_capacity(route.len().saturating_sub(1));
        let mut days = Vec::new();
        let mut today = OpenDay::on(start);

        for pair in route.windows(2) {
            let leg = self.leg(pair[0], pair[1])?;
            let mut rest = Remaining {
                miles: leg.real_distance_miles,
                fuel:  leg.fuel_gallons,
                hours: leg.hours,
            };

            while today.hours + rest.hours > cap {
                let room = cap - today.hours;
                let proportion = room / rest.hours;
                let miles = rest.miles * proportion;
                let fuel = rest.fuel * proportion;

                today.hours = cap;
                today.distance += miles;
                today.fuel += fuel;
                today.risk += self.weather.average(leg.from, leg.to, today.date);

                let closed = today.close();
                trace!(date = %closed.date, miles = closed.distance_miles, risk = closed.risk, "day closed at cap");
                days.push(closed);
                today = OpenDay::on(next_day(today.date)?);

                rest.miles -= miles;
                rest.fuel -= fuel;
                rest.hours -= room;
            }

            today.hours += rest.hours;
            today.distance += rest.miles;
            today.fuel += rest.fuel;
            today.risk += self.weather.average(leg.from, leg.to, today.date);

            legs.push(leg);
        }
        days.push(today.close());

        let total_distance: f64 = legs.iter().map(|l| l.real_distance_miles).sum();
        let total_fuel: f64 = legs.iter().map(|l| l.fuel_gallons).sum();

        Ok(TripResult {
            start_date:           start,
            end_date:             today.date,
            total_distance_miles: total_distance,
            total_fuel_gallons:   total_fuel,
            total_hours:          legs.iter().map(|l| l.hours).sum(),
            total_risk:           days.iter().map(|d| d.risk).sum(),
            overall_mpg:          mpg_of(total_distance, total_fuel),
            legs,
            days,
        })
    }

    /// Distance, fuel, and time for one route pair, before day splitting.
    fn leg(&self, from: CityId, to: CityId) -> PlannerResult<LegSummary> {
        let (map_miles, via_fallback) = match self.graph.direct_weight(from, to) {
            Some(w) => (w, false),
            None => {
                let d = self.router.distance(self.graph, from, to)?;
                debug!(%from, %to, miles = d, "no direct edge; using shortest-path distance");
                (d, true)
            }
        };
        // An infinite leg would never finish splitting.
        if map_miles.is_infinite() {
            return Err(PlannerError::Unreachable { from, to });
        }

        let real = real_distance(
            map_miles,
            self.cities.elevation_ft(from)?,
            self.cities.elevation_ft(to)?,
        );
        let mpg = adjusted_mpg(self.config.base_mpg, real.slope);

        Ok(LegSummary {
            from,
            to,
            map_distance_miles:  map_miles,
            via_fallback,
            real_distance_miles: real.miles,
            slope:               real.slope,
            mpg,
            fuel_gallons:        real.miles / mpg,
            hours:               real.miles / self.config.max_speed_mph,
        })
    }
}
