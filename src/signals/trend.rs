//! Heuristic trend classification from moving-average ordering and
//! short-term momentum.

use crate::common::math;
use crate::models::snapshot::TrendDirection;
use crate::signals::scoring::classify_trend;

/// Closes required before any trend is reported.
pub const TREND_MIN_BARS: usize = 20;
/// Momentum compares the last close with the close this many bars back,
/// counting the last bar itself.
pub const MOMENTUM_LOOKBACK: usize = 5;
pub const MOMENTUM_THRESHOLD_PCT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendAssessment {
    pub score: i32,
    pub direction: TrendDirection,
    pub strength: u32,
}

impl TrendAssessment {
    pub fn neutral() -> Self {
        Self {
            score: 0,
            direction: TrendDirection::Neutral,
            strength: 0,
        }
    }
}

/// Score the trend of an ascending close series.
///
/// Each present comparison adds or subtracts one point: SMA20 vs SMA50,
/// SMA50 vs SMA200, last close vs SMA20, and 5-bar momentum beyond ±2%.
/// Ties on the moving-average comparisons count as bearish.
pub fn analyze_trend(
    closes: &[f64],
    sma_20: Option<f64>,
    sma_50: Option<f64>,
    sma_200: Option<f64>,
) -> TrendAssessment {
    if closes.len() < TREND_MIN_BARS {
        return TrendAssessment::neutral();
    }

    let Some(&last) = closes.last() else {
        return TrendAssessment::neutral();
    };
    let mut score = 0;

    if let (Some(fast), Some(slow)) = (sma_20, sma_50) {
        score += if fast > slow { 1 } else { -1 };
    }

    if let (Some(fast), Some(slow)) = (sma_50, sma_200) {
        score += if fast > slow { 1 } else { -1 };
    }

    if let Some(sma) = sma_20 {
        score += if last > sma { 1 } else { -1 };
    }

    if closes.len() >= MOMENTUM_LOOKBACK {
        let base = closes[closes.len() - MOMENTUM_LOOKBACK];
        if let Some(change) = math::percent_change(base, last) {
            if change > MOMENTUM_THRESHOLD_PCT {
                score += 1;
            } else if change < -MOMENTUM_THRESHOLD_PCT {
                score -= 1;
            }
        }
    }

    let (direction, strength) = classify_trend(score);
    TrendAssessment {
        score,
        direction,
        strength,
    }
}
