//! Plain numeric primitives over close/volume series.

/// Arithmetic mean of a slice. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple moving average over the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    mean(&values[values.len() - period..])
}

/// Smoothing constant `2 / (period + 1)`.
pub fn ema_multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One step of the EMA recurrence.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let k = ema_multiplier(period);
    value * k + previous * (1.0 - k)
}

/// Exponential moving average over the whole series.
///
/// Seeded with the mean of the first `period` values, then folded forward
/// over the remainder. Always a full recomputation.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let seed = mean(&values[..period])?;
    Some(
        values[period..]
            .iter()
            .fold(seed, |prev, &v| ema_from_previous(v, prev, period)),
    )
}

/// Sample standard deviation (n - 1 denominator) of the last `period` values.
pub fn sample_std_dev(values: &[f64], period: usize) -> Option<f64> {
    if period < 2 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let avg = mean(window)?;
    let variance = window.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (period - 1) as f64;
    Some(variance.sqrt())
}

/// Percentage distance of `value` from `base`. `None` when `base` is zero.
pub fn percent_change(base: f64, value: f64) -> Option<f64> {
    if base == 0.0 {
        return None;
    }
    Some((value - base) / base * 100.0)
}
