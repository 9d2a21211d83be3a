//! Brute-force best-start-date search.
//!
//! Candidate dates have no data dependency on each other, so with the
//! `parallel` feature they are simulated on Rayon's pool.  Either way the
//! outcomes are reduced sequentially in ascending date order with a strict
//! less-than comparison, so the earliest date wins a risk tie regardless of
//! which thread finished first.

use tracing::{debug, info};

use rt_core::{CityId, DateWindow, NaiveDate};
use rt_graph::Router;

use crate::{PlannerError, PlannerResult, TripPlanner, TripResult};

impl<R: Router> TripPlanner<'_, R> {
    /// Pick the start date in `window` whose trip has the lowest total risk.
    ///
    /// A candidate is rejected when its trip ends after `window.end`.  Fails
    /// with [`PlannerError::NoFeasibleWindow`] if every candidate is
    /// rejected (or the window is empty); any simulation error is returned
    /// as-is.
    pub fn best_travel_date(
        &self,
        route:  &[CityId],
        window: DateWindow,
    ) -> PlannerResult<(NaiveDate, TripResult)> {
        self.check_inputs(route)?;

        let outcomes = self.simulate_window(route, window);

        let mut best: Option<(NaiveDate, TripResult)> = None;
        let mut rejected = 0usize;
        for (date, outcome) in outcomes {
            let trip = outcome?;
            if trip.end_date > window.end {
                debug!(start = %date, end = %trip.end_date, "candidate overflows window");
                rejected += 1;
                continue;
            }
            if best.as_ref().is_none_or(|(_, b)| trip.total_risk < b.total_risk) {
                best = Some((date, trip));
            }
        }

        match best {
            Some((date, trip)) => {
                info!(
                    %window,
                    start = %date,
                    risk = trip.total_risk,
                    rejected,
                    "best start date selected"
                );
                Ok((date, trip))
            }
            None => Err(PlannerError::NoFeasibleWindow { window }),
        }
    }

    /// Simulate every date of `window`, returned in ascending date order.
    #[cfg(not(feature = "parallel"))]
    fn simulate_window(
        &self,
        route:  &[CityId],
        window: DateWindow,
    ) -> Vec<(NaiveDate, PlannerResult<TripResult>)> {
        window
            .days()
            .map(|date| (date, self.run(route, date)))
            .collect()
    }

    /// Simulate every date of `window`, returned in ascending date order.
    #[cfg(feature = "parallel")]
    fn simulate_window(
        &self,
        route:  &[CityId],
        window: DateWindow,
    ) -> Vec<(NaiveDate, PlannerResult<TripResult>)> {
        use rayon::prelude::*;

        // `collect` on an indexed parallel iterator preserves input order.
        let dates: Vec<NaiveDate> = window.days().collect();
        dates
            .into_par_iter()
            .map(|date| (date, self.run(route, date)))
            .collect()
    }
}
