//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::bar::{closes, PriceBar};

/// Mean of the last `period` closes.
pub fn calculate_sma(bars: &[PriceBar], period: usize) -> Option<f64> {
    if bars.len() < period {
        return None;
    }
    math::sma(&closes(bars), period)
}
