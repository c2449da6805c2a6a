//! Volume averages and relative volume

use crate::models::bar::PriceBar;
use crate::models::indicators::VolumeAnalysis;

/// Mean volume over the last `period` bars (truncated to whole shares) and
/// the ratio of `current_volume` to it.
///
/// The ratio is left unset when the security carries no current volume or
/// the average is zero.
pub fn calculate_volume(
    bars: &[PriceBar],
    period: usize,
    current_volume: Option<i64>,
) -> Option<VolumeAnalysis> {
    if period == 0 || bars.len() < period {
        return None;
    }

    let recent = &bars[bars.len() - period..];
    let total: i128 = recent.iter().map(|b| b.volume as i128).sum();
    let average = (total / period as i128) as i64;

    let ratio = match current_volume {
        Some(volume) if average > 0 => Some(volume as f64 / average as f64),
        _ => None,
    };

    Some(VolumeAnalysis { average, ratio })
}

/// Calculate volume analysis with default period (20)
pub fn calculate_volume_default(
    bars: &[PriceBar],
    current_volume: Option<i64>,
) -> Option<VolumeAnalysis> {
    calculate_volume(bars, 20, current_volume)
}
