//! Price position relative to a moving average

use crate::common::math;

/// Percent above (positive) or below (negative) `average`. A zero average
/// reports 0.
pub fn price_position(price: f64, average: f64) -> f64 {
    math::percent_change(average, price).unwrap_or(0.0)
}
