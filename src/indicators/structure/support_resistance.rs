//! Support and Resistance levels

use crate::models::bar::PriceBar;
use crate::models::indicators::SupportResistance;

/// Lowest low and highest high over the trailing `lookback` bars.
pub fn calculate_support_resistance(
    bars: &[PriceBar],
    lookback: usize,
) -> Option<SupportResistance> {
    if lookback == 0 || bars.len() < lookback {
        return None;
    }

    let recent = &bars[bars.len() - lookback..];
    let support = recent.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let resistance = recent
        .iter()
        .map(|b| b.high)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(SupportResistance {
        support,
        resistance,
    })
}

/// Calculate support/resistance with default lookback (20)
pub fn calculate_support_resistance_default(bars: &[PriceBar]) -> Option<SupportResistance> {
    calculate_support_resistance(bars, 20)
}
