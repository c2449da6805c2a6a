//! Unit tests for volume analysis

use crate::support::{assert_close, linear_bars};
use paperdesk::indicators::volume::{calculate_volume, calculate_volume_default};
use paperdesk::models::PriceBar;

fn with_volumes(volumes: &[i64]) -> Vec<PriceBar> {
    linear_bars(volumes.len(), 100.0, 1.0)
        .into_iter()
        .zip(volumes)
        .map(|(mut bar, &v)| {
            bar.volume = v;
            bar
        })
        .collect()
}

#[test]
fn test_volume_insufficient_data() {
    let bars = with_volumes(&[1000; 19]);
    assert!(calculate_volume_default(&bars, Some(1000)).is_none());
}

#[test]
fn test_volume_average_truncates() {
    // 1000..=1019 sums to 20190, mean 1009.5
    let volumes: Vec<i64> = (1000..1020).collect();
    let bars = with_volumes(&volumes);
    let analysis = calculate_volume(&bars, 20, Some(2018)).unwrap();
    assert_eq!(analysis.average, 1009);
    assert_close(analysis.ratio.unwrap(), 2.0);
}

#[test]
fn test_volume_ratio_needs_current_volume() {
    let volumes: Vec<i64> = (1000..1020).collect();
    let bars = with_volumes(&volumes);
    let analysis = calculate_volume_default(&bars, None).unwrap();
    assert_eq!(analysis.average, 1009);
    assert!(analysis.ratio.is_none());
}

#[test]
fn test_volume_zero_average_leaves_ratio_unset() {
    let bars = with_volumes(&[0; 20]);
    let analysis = calculate_volume_default(&bars, Some(500)).unwrap();
    assert_eq!(analysis.average, 0);
    assert!(analysis.ratio.is_none());
}
