//! Bollinger Bands indicator

use crate::common::math;
use crate::models::bar::{closes, PriceBar};
use crate::models::indicators::BollingerBands;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * sample standard deviation)
/// Lower Band = Middle - (std_dev * sample standard deviation)
pub fn calculate_bollinger_bands(
    bars: &[PriceBar],
    period: usize,
    std_dev: f64,
) -> Option<BollingerBands> {
    if bars.len() < period {
        return None;
    }

    let closes = closes(bars);
    let middle = math::sma(&closes, period)?;
    let sigma = math::sample_std_dev(&closes, period)?;

    let upper = middle + (std_dev * sigma);
    let lower = middle - (std_dev * sigma);

    Some(BollingerBands {
        upper,
        middle,
        lower,
        width: upper - lower,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(bars: &[PriceBar]) -> Option<BollingerBands> {
    calculate_bollinger_bands(bars, 20, 2.0)
}
