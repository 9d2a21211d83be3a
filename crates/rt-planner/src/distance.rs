//! Elevation-adjusted distance and fuel-economy model.
//!
//! The slope here is elevation change (miles) divided by *map* distance, and
//! the real distance is `map * (1 + slope)`.  This is a deliberate
//! simplification rather than a trigonometric grade; downstream totals
//! depend on these exact formulas.

use rt_core::FEET_PER_MILE;

/// Driving distance after elevation adjustment, plus the slope used for it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealDistance {
    pub miles: f64,
    /// Elevation gain in miles per map mile (negative downhill).
    pub slope: f64,
}

/// Convert a map distance between two elevations into a real distance.
///
/// A zero map distance yields `(0, 0)`.  A negative map distance (only
/// possible with synthetic inputs) is passed through with zero slope.
pub fn real_distance(map_miles: f64, elevation_a_ft: f64, elevation_b_ft: f64) -> RealDistance {
    if map_miles <= 0.0 {
        return RealDistance { miles: map_miles, slope: 0.0 };
    }

    let elevation_diff_miles = (elevation_b_ft - elevation_a_ft) / FEET_PER_MILE;
    let slope = elevation_diff_miles / map_miles;
    RealDistance {
        miles: map_miles * (1.0 + slope),
        slope,
    }
}

/// Slope-adjusted fuel economy: `base_mpg / (1 + slope)`.
///
/// Uphill lowers MPG, downhill raises it.  When `1 + slope <= 0` the
/// divisor is meaningless and `base_mpg` is returned unchanged.
pub fn adjusted_mpg(base_mpg: f64, slope: f64) -> f64 {
    let factor = 1.0 + slope;
    if factor <= 0.0 {
        return base_mpg;
    }
    base_mpg / factor
}
