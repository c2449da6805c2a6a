//! Unit tests for price position

use crate::support::assert_close;
use paperdesk::indicators::position::price_position;

#[test]
fn test_price_above_and_below_average() {
    assert_close(price_position(110.0, 100.0), 10.0);
    assert_close(price_position(90.0, 100.0), -10.0);
}

#[test]
fn test_price_position_zero_average() {
    assert_eq!(price_position(50.0, 0.0), 0.0);
}
