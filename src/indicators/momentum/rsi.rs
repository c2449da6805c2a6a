//! RSI (Relative Strength Index) indicator

use crate::models::bar::PriceBar;

/// RSI reported when there is not enough history, or no price movement.
pub const NEUTRAL_RSI: f64 = 50.0;

/// Calculate RSI over the last `period` close-to-close changes
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Gains and losses are two aligned sequences (a down day contributes 0 to
/// the gains and vice versa) averaged with a plain mean, not Wilder
/// smoothing. A window without losses reports 100; a window without any
/// movement reports the neutral 50.
pub fn calculate_rsi(bars: &[PriceBar], period: usize) -> f64 {
    if period == 0 || bars.len() < period + 1 {
        return NEUTRAL_RSI;
    }

    let mut gains = Vec::with_capacity(bars.len() - 1);
    let mut losses = Vec::with_capacity(bars.len() - 1);

    for pair in bars.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let avg_gain: f64 = gains.iter().rev().take(period).sum::<f64>() / period as f64;
    let avg_loss: f64 = losses.iter().rev().take(period).sum::<f64>() / period as f64;

    if avg_loss == 0.0 {
        return if avg_gain == 0.0 { NEUTRAL_RSI } else { 100.0 };
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(bars: &[PriceBar]) -> f64 {
    calculate_rsi(bars, 14)
}
