//! Unit tests for the fixed score tables

use paperdesk::models::{OverallSignal, TrendDirection};
use paperdesk::signals::scoring::{
    classify_signal, classify_trend, macd_points, position_points, rsi_points, trend_points,
};

#[test]
fn test_trend_table() {
    let cases = [
        (6, TrendDirection::StrongBullish, 100),
        (5, TrendDirection::StrongBullish, 100),
        (4, TrendDirection::StrongBullish, 80),
        (3, TrendDirection::StrongBullish, 60),
        (2, TrendDirection::Bullish, 30),
        (1, TrendDirection::Bullish, 15),
        (0, TrendDirection::Neutral, 0),
        (-1, TrendDirection::Bearish, 15),
        (-2, TrendDirection::Bearish, 30),
        (-3, TrendDirection::StrongBearish, 60),
        (-4, TrendDirection::StrongBearish, 80),
    ];
    for (score, direction, strength) in cases {
        assert_eq!(classify_trend(score), (direction, strength), "score {score}");
    }
}

#[test]
fn test_signal_table() {
    let cases = [
        (7, OverallSignal::StrongBuy, 100),
        (4, OverallSignal::StrongBuy, 60),
        (3, OverallSignal::Buy, 36),
        (2, OverallSignal::Buy, 24),
        (1, OverallSignal::Hold, 55),
        (0, OverallSignal::Hold, 50),
        (-1, OverallSignal::Hold, 55),
        (-2, OverallSignal::Sell, 24),
        (-3, OverallSignal::Sell, 36),
        (-4, OverallSignal::StrongSell, 60),
        (-7, OverallSignal::StrongSell, 100),
    ];
    for (score, signal, strength) in cases {
        assert_eq!(classify_signal(score), (signal, strength), "score {score}");
    }
}

#[test]
fn test_rsi_ladder_first_match() {
    assert_eq!(rsi_points(25.0), 2);
    assert_eq!(rsi_points(30.0), 1);
    assert_eq!(rsi_points(39.9), 1);
    assert_eq!(rsi_points(40.0), 0);
    assert_eq!(rsi_points(60.0), 0);
    assert_eq!(rsi_points(65.0), -1);
    assert_eq!(rsi_points(70.0), -1);
    assert_eq!(rsi_points(70.1), -2);
    assert_eq!(rsi_points(100.0), -2);
}

#[test]
fn test_macd_points_tie_is_bearish() {
    assert_eq!(macd_points(1.0, 0.5), 1);
    assert_eq!(macd_points(0.5, 0.5), -1);
    assert_eq!(macd_points(-1.0, 0.5), -1);
}

#[test]
fn test_trend_points() {
    assert_eq!(trend_points(TrendDirection::StrongBullish), 2);
    assert_eq!(trend_points(TrendDirection::Bullish), 1);
    assert_eq!(trend_points(TrendDirection::Neutral), 0);
    assert_eq!(trend_points(TrendDirection::Bearish), -1);
    assert_eq!(trend_points(TrendDirection::StrongBearish), -2);
}

#[test]
fn test_position_points_need_more_than_five_percent() {
    assert_eq!(position_points(5.0), 0);
    assert_eq!(position_points(5.1), 1);
    assert_eq!(position_points(-5.0), 0);
    assert_eq!(position_points(-5.1), -1);
}

#[test]
fn test_labels_round_trip_through_strings() {
    for signal in [
        OverallSignal::StrongBuy,
        OverallSignal::Buy,
        OverallSignal::Hold,
        OverallSignal::Sell,
        OverallSignal::StrongSell,
    ] {
        assert_eq!(signal.as_str().parse::<OverallSignal>(), Ok(signal));
    }
    assert!("sideways".parse::<TrendDirection>().is_err());
    assert_eq!(
        serde_json::to_string(&TrendDirection::StrongBearish).unwrap(),
        "\"strong_bearish\""
    );
}
