//! Fixed score tables mapping integer scores to labels and strengths.
//!
//! Both tables are non-adaptive; the thresholds and multipliers are part of
//! the output contract.

use crate::models::snapshot::{OverallSignal, TrendDirection};

/// Map a cumulative trend score to its label and 0-100 strength.
///
/// | score | label | strength |
/// |---|---|---|
/// | >= 3 | strong_bullish | min(100, \|s\|·20) |
/// | >= 1 | bullish | \|s\|·15 |
/// | <= -3 | strong_bearish | min(100, \|s\|·20) |
/// | <= -1 | bearish | \|s\|·15 |
/// | 0 | neutral | 0 |
pub fn classify_trend(score: i32) -> (TrendDirection, u32) {
    let magnitude = score.unsigned_abs();
    if score >= 3 {
        (TrendDirection::StrongBullish, (magnitude * 20).min(100))
    } else if score >= 1 {
        (TrendDirection::Bullish, magnitude * 15)
    } else if score <= -3 {
        (TrendDirection::StrongBearish, (magnitude * 20).min(100))
    } else if score <= -1 {
        (TrendDirection::Bearish, magnitude * 15)
    } else {
        (TrendDirection::Neutral, 0)
    }
}

/// Map a cumulative signal score to its label and 0-100 strength.
///
/// | score | label | strength |
/// |---|---|---|
/// | >= 4 | strong_buy | min(100, \|s\|·15) |
/// | >= 2 | buy | \|s\|·12 |
/// | <= -4 | strong_sell | min(100, \|s\|·15) |
/// | <= -2 | sell | \|s\|·12 |
/// | otherwise | hold | 50 + \|s\|·5 |
pub fn classify_signal(score: i32) -> (OverallSignal, u32) {
    let magnitude = score.unsigned_abs();
    if score >= 4 {
        (OverallSignal::StrongBuy, (magnitude * 15).min(100))
    } else if score >= 2 {
        (OverallSignal::Buy, magnitude * 12)
    } else if score <= -4 {
        (OverallSignal::StrongSell, (magnitude * 15).min(100))
    } else if score <= -2 {
        (OverallSignal::Sell, magnitude * 12)
    } else {
        (OverallSignal::Hold, 50 + magnitude * 5)
    }
}

/// RSI ladder, first match wins: <30 → +2, <40 → +1, >70 → -2, >60 → -1.
pub fn rsi_points(rsi: f64) -> i32 {
    if rsi < 30.0 {
        2
    } else if rsi < 40.0 {
        1
    } else if rsi > 70.0 {
        -2
    } else if rsi > 60.0 {
        -1
    } else {
        0
    }
}

/// +1 when the MACD line is above its signal, -1 otherwise.
pub fn macd_points(line: f64, signal: f64) -> i32 {
    if line > signal {
        1
    } else {
        -1
    }
}

pub fn trend_points(trend: TrendDirection) -> i32 {
    match trend {
        TrendDirection::StrongBullish => 2,
        TrendDirection::Bullish => 1,
        TrendDirection::Neutral => 0,
        TrendDirection::Bearish => -1,
        TrendDirection::StrongBearish => -2,
    }
}

/// ±1 when price sits more than 5% away from SMA20.
pub fn position_points(price_vs_sma20: f64) -> i32 {
    if price_vs_sma20 > 5.0 {
        1
    } else if price_vs_sma20 < -5.0 {
        -1
    } else {
        0
    }
}
