//! Snapshot engine: bars + quote in, full `IndicatorSnapshot` out.

use crate::indicators::{
    calculate_bollinger_bands, calculate_ema, calculate_ema_direction, calculate_macd_default,
    calculate_rsi_default, calculate_sma, calculate_support_resistance, calculate_volume,
    price_position,
};
use crate::models::bar::{closes, PriceBar, Quote};
use crate::models::snapshot::IndicatorSnapshot;
use crate::signals::overall::{evaluate_signal, SignalInputs};
use crate::signals::trend::analyze_trend;

/// Bars fetched per security by default; the longest window is 200.
pub const DEFAULT_HISTORY_LIMIT: usize = 200;

const BAND_PERIOD: usize = 20;
const BAND_STD_DEV: f64 = 2.0;
const STRUCTURE_LOOKBACK: usize = 20;
const VOLUME_PERIOD: usize = 20;

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Compute the snapshot for one security.
    ///
    /// `bars` must be ascending by date with the newest bar last. Returns
    /// `None` only for an empty history; short histories leave the affected
    /// fields unset.
    pub fn compute(
        security_id: i64,
        bars: &[PriceBar],
        quote: &Quote,
    ) -> Option<IndicatorSnapshot> {
        let as_of = bars.last()?.date;
        let price = quote.price;

        let sma_20 = calculate_sma(bars, 20);
        let sma_50 = calculate_sma(bars, 50);
        let sma_200 = calculate_sma(bars, 200);

        let ema_12 = calculate_ema(bars, 12);
        let ema_26 = calculate_ema(bars, 26);
        let ema_200 = calculate_ema(bars, 200);
        // The previous EMA(200) needs 201 bars. At the default history limit
        // of 200 the direction compares against SMA(200), which equals the
        // EMA seed, so it reads `sideways`.
        let ema_200_direction = calculate_ema_direction(bars, 200, sma_200);

        let macd = calculate_macd_default(bars);
        let rsi_14 = calculate_rsi_default(bars);
        let bands = calculate_bollinger_bands(bars, BAND_PERIOD, BAND_STD_DEV);
        let levels = calculate_support_resistance(bars, STRUCTURE_LOOKBACK);
        let volume = calculate_volume(bars, VOLUME_PERIOD, quote.volume);

        let price_vs_sma20 = sma_20.map(|avg| price_position(price, avg));

        let trend = analyze_trend(&closes(bars), sma_20, sma_50, sma_200);
        let signal = evaluate_signal(&SignalInputs {
            rsi: Some(rsi_14),
            macd_line: macd.map(|m| m.line),
            macd_signal: macd.and_then(|m| m.signal),
            trend: trend.direction,
            price_vs_sma20,
        });

        Some(IndicatorSnapshot {
            security_id,
            as_of,
            bars_used: bars.len(),
            sma_20,
            sma_50,
            sma_200,
            ema_12,
            ema_26,
            ema_200,
            ema_200_direction,
            macd_line: macd.map(|m| m.line),
            macd_signal: macd.and_then(|m| m.signal),
            macd_histogram: macd.and_then(|m| m.histogram),
            rsi_14,
            bb_upper: bands.map(|b| b.upper),
            bb_middle: bands.map(|b| b.middle),
            bb_lower: bands.map(|b| b.lower),
            bb_width: bands.map(|b| b.width),
            support_level: levels.map(|l| l.support),
            resistance_level: levels.map(|l| l.resistance),
            volume_sma_20: volume.map(|v| v.average),
            volume_ratio: volume.and_then(|v| v.ratio),
            price_vs_sma20,
            price_vs_sma50: sma_50.map(|avg| price_position(price, avg)),
            price_vs_sma200: sma_200.map(|avg| price_position(price, avg)),
            price_vs_ema200: ema_200.map(|avg| price_position(price, avg)),
            trend_direction: trend.direction,
            trend_strength: trend.strength,
            overall_signal: signal.signal,
            signal_strength: signal.strength,
        })
    }
}
