//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::bar::{closes, PriceBar};
use crate::models::indicators::EmaDirection;

/// Calculate EMA for a specific period over the full bar history
pub fn calculate_ema(bars: &[PriceBar], period: usize) -> Option<f64> {
    if bars.len() < period {
        return None;
    }
    math::ema(&closes(bars), period)
}

/// Direction of EMA(`period`) for the latest bar.
///
/// The previous value is a full recomputation over the history without its
/// last bar, available only when there is more than `period` bars. Without
/// it the current EMA is compared against the SMA of the same period, and
/// with neither the direction is `Neutral`. `None` when the current EMA
/// itself cannot be computed.
pub fn calculate_ema_direction(
    bars: &[PriceBar],
    period: usize,
    sma: Option<f64>,
) -> Option<EmaDirection> {
    let current = calculate_ema(bars, period)?;

    let previous = if bars.len() > period {
        calculate_ema(&bars[..bars.len() - 1], period)
    } else {
        None
    };

    let direction = match previous.or(sma) {
        Some(reference) => compare(current, reference),
        None => EmaDirection::Neutral,
    };
    Some(direction)
}

fn compare(current: f64, reference: f64) -> EmaDirection {
    if current > reference {
        EmaDirection::Up
    } else if current < reference {
        EmaDirection::Down
    } else {
        EmaDirection::Sideways
    }
}
