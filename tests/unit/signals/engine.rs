//! Unit tests for the snapshot engine

use crate::support::{assert_close, flat_bars, linear_bars};
use paperdesk::models::{EmaDirection, OverallSignal, Quote, TrendDirection};
use paperdesk::signals::engine::IndicatorEngine;

#[test]
fn test_empty_history_yields_nothing() {
    assert!(IndicatorEngine::compute(1, &[], &Quote::new(100.0)).is_none());
}

#[test]
fn test_twenty_five_rising_closes() {
    let bars = linear_bars(25, 100.0, 1.0);
    let snapshot = IndicatorEngine::compute(7, &bars, &Quote::new(124.0)).unwrap();

    assert_eq!(snapshot.security_id, 7);
    assert_eq!(snapshot.as_of, bars[24].date);
    assert_eq!(snapshot.bars_used, 25);

    assert_close(snapshot.sma_20.unwrap(), 114.5);
    assert!(snapshot.sma_50.is_none());
    assert!(snapshot.sma_200.is_none());
    assert_close(snapshot.ema_12.unwrap(), 118.5);
    assert!(snapshot.ema_26.is_none());
    assert!(snapshot.ema_200.is_none());
    assert!(snapshot.ema_200_direction.is_none());
    assert!(snapshot.macd_line.is_none());
    assert!(snapshot.macd_signal.is_none());
    assert!(snapshot.macd_histogram.is_none());

    assert_close(snapshot.rsi_14, 100.0);
    assert_close(snapshot.bb_middle.unwrap(), 114.5);
    assert_close(snapshot.support_level.unwrap(), 104.0);
    assert_close(snapshot.resistance_level.unwrap(), 125.0);
    assert_eq!(snapshot.volume_sma_20, Some(1000));
    // No current volume on the quote
    assert!(snapshot.volume_ratio.is_none());
    assert_close(
        snapshot.price_vs_sma20.unwrap(),
        (124.0 - 114.5) / 114.5 * 100.0,
    );

    // Trend: close above SMA20 (+1) and 5-bar momentum +3.3% (+1)
    assert_eq!(snapshot.trend_direction, TrendDirection::Bullish);
    assert_eq!(snapshot.trend_strength, 30);
    // Signal: RSI 100 (-2), bullish trend (+1), 8.3% above SMA20 (+1)
    assert_eq!(snapshot.overall_signal, OverallSignal::Hold);
    assert_eq!(snapshot.signal_strength, 50);
}

#[test]
fn test_short_history_leaves_windows_unset() {
    let bars = linear_bars(15, 100.0, 1.0);
    let snapshot = IndicatorEngine::compute(1, &bars, &Quote::new(114.0)).unwrap();

    assert!(snapshot.sma_20.is_none());
    assert!(snapshot.bb_upper.is_none());
    assert!(snapshot.bb_width.is_none());
    assert!(snapshot.support_level.is_none());
    assert!(snapshot.resistance_level.is_none());
    assert!(snapshot.volume_sma_20.is_none());
    assert!(snapshot.volume_ratio.is_none());
    assert!(snapshot.price_vs_sma20.is_none());
    assert_close(snapshot.ema_12.unwrap(), 114.0 - 5.5);

    assert_eq!(snapshot.trend_direction, TrendDirection::Neutral);
    assert_eq!(snapshot.trend_strength, 0);
    // Only the overbought RSI scores
    assert_eq!(snapshot.overall_signal, OverallSignal::Sell);
    assert_eq!(snapshot.signal_strength, 24);
}

#[test]
fn test_tiny_history_is_neutral_hold() {
    let bars = linear_bars(10, 100.0, 1.0);
    let snapshot = IndicatorEngine::compute(1, &bars, &Quote::new(109.0)).unwrap();
    assert_close(snapshot.rsi_14, 50.0);
    assert_eq!(snapshot.overall_signal, OverallSignal::Hold);
    assert_eq!(snapshot.signal_strength, 50);
}

#[test]
fn test_long_history_fills_every_field() {
    let bars = linear_bars(210, 100.0, 1.0);
    let snapshot = IndicatorEngine::compute(1, &bars, &Quote::new(309.0)).unwrap();

    assert_close(snapshot.sma_20.unwrap(), 299.5);
    assert_close(snapshot.sma_50.unwrap(), 284.5);
    assert_close(snapshot.sma_200.unwrap(), 209.5);
    assert!(snapshot.ema_26.is_some());
    assert!(snapshot.ema_200.is_some());
    assert_eq!(snapshot.ema_200_direction, Some(EmaDirection::Up));
    assert!((snapshot.macd_line.unwrap() - 7.0).abs() < 1e-6);
    assert!((snapshot.macd_signal.unwrap() - 7.0).abs() < 1e-6);
    assert!(snapshot.macd_histogram.unwrap().abs() < 1e-6);
    assert!(snapshot.bb_upper.is_some());
    assert!(snapshot.price_vs_sma50.is_some());
    assert!(snapshot.price_vs_sma200.is_some());
    assert!(snapshot.price_vs_ema200.is_some());

    assert_eq!(snapshot.trend_direction, TrendDirection::StrongBullish);
    assert_eq!(snapshot.trend_strength, 60);
}

#[test]
fn test_flat_history() {
    let bars = flat_bars(30, 50.0);
    let snapshot = IndicatorEngine::compute(1, &bars, &Quote::new(50.0)).unwrap();

    assert_close(snapshot.rsi_14, 50.0);
    assert_eq!(snapshot.bb_upper, snapshot.bb_middle);
    assert_eq!(snapshot.bb_lower, snapshot.bb_middle);
    assert_close(snapshot.bb_width.unwrap(), 0.0);
    assert_close(snapshot.price_vs_sma20.unwrap(), 0.0);
    assert_eq!(snapshot.trend_direction, TrendDirection::Bearish);
    assert_eq!(snapshot.trend_strength, 15);
}

#[test]
fn test_quote_drives_price_position_and_volume_ratio() {
    let bars = linear_bars(25, 100.0, 1.0);
    let quote = Quote::new(137.4).with_volume(2500);
    let snapshot = IndicatorEngine::compute(1, &bars, &quote).unwrap();

    assert!((snapshot.price_vs_sma20.unwrap() - 20.0).abs() < 1e-9);
    assert_close(snapshot.volume_ratio.unwrap(), 2.5);
}

#[test]
fn test_compute_is_idempotent() {
    let bars = linear_bars(120, 80.0, 0.7);
    let quote = Quote::new(163.3).with_volume(1200);
    let first = IndicatorEngine::compute(3, &bars, &quote).unwrap();
    let second = IndicatorEngine::compute(3, &bars, &quote).unwrap();
    assert_eq!(first, second);
}
