//! Unit tests for SMA indicator

use crate::support::{assert_close, linear_bars};
use paperdesk::indicators::trend::calculate_sma;

#[test]
fn test_sma_insufficient_data() {
    let bars = linear_bars(19, 100.0, 1.0);
    assert!(calculate_sma(&bars, 20).is_none());
}

#[test]
fn test_sma_of_last_twenty_closes() {
    // closes 100..=124, last 20 are 105..=124
    let bars = linear_bars(25, 100.0, 1.0);
    assert_close(calculate_sma(&bars, 20).unwrap(), 114.5);
}

#[test]
fn test_sma_longer_windows_gate_independently() {
    let bars = linear_bars(60, 100.0, 1.0);
    assert!(calculate_sma(&bars, 50).is_some());
    assert!(calculate_sma(&bars, 200).is_none());
}
