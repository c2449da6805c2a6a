//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::bar::{closes, PriceBar};
use crate::models::indicators::MacdIndicator;

pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = mean of the last `signal_period` MACD values, each recomputed
/// from scratch over the closes preceding index `i` for `i` in
/// `max(slow, n - signal_period)..n`
/// Histogram = MACD - Signal
///
/// The line needs `slow` bars; signal and histogram need
/// `slow + signal_period`.
pub fn calculate_macd(
    bars: &[PriceBar],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdIndicator> {
    let closes = closes(bars);
    let fast_ema = math::ema(&closes, fast_period)?;
    let slow_ema = math::ema(&closes, slow_period)?;
    let line = fast_ema - slow_ema;

    let signal = if closes.len() >= slow_period + signal_period {
        signal_line(&closes, fast_period, slow_period, signal_period)
    } else {
        None
    };

    Some(MacdIndicator {
        line,
        signal,
        histogram: signal.map(|s| line - s),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(bars: &[PriceBar]) -> Option<MacdIndicator> {
    calculate_macd(bars, MACD_FAST, MACD_SLOW, MACD_SIGNAL)
}

fn signal_line(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<f64> {
    let n = closes.len();
    let start = slow_period.max(n.saturating_sub(signal_period));

    let values: Vec<f64> = (start..n)
        .filter_map(|i| {
            let fast = math::ema(&closes[..i], fast_period)?;
            let slow = math::ema(&closes[..i], slow_period)?;
            Some(fast - slow)
        })
        .collect();

    let tail = &values[values.len().saturating_sub(signal_period)..];
    math::mean(tail)
}
