//! Unit tests for the in-memory store

use crate::support::{linear_bars, start_date};
use paperdesk::db::{IndicatorStore, MemoryStore, StoreError};
use paperdesk::models::{Quote, Security};
use paperdesk::signals::engine::IndicatorEngine;

#[test]
fn test_securities_are_listed_by_symbol() {
    tokio_test::block_on(async {
        let store = MemoryStore::new();
        store.add_security(Security::new(1, "MSFT")).await;
        store.add_security(Security::new(2, "AAPL")).await;
        store.add_security(Security::new(3, "GOOG")).await;

        let symbols: Vec<String> = store
            .list_securities()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.symbol)
            .collect();
        assert_eq!(symbols, vec!["AAPL", "GOOG", "MSFT"]);
    });
}

#[test]
fn test_price_history_returns_newest_bars_ascending() {
    tokio_test::block_on(async {
        let store = MemoryStore::new();
        let mut bars = linear_bars(30, 100.0, 1.0);
        bars.reverse();
        store.add_bars(1, bars).await;

        let history = store.price_history(1, 10).await.unwrap();
        assert_eq!(history.len(), 10);
        assert_eq!(history[0].close, 120.0);
        assert_eq!(history[9].close, 129.0);
        assert!(history.windows(2).all(|w| w[0].date < w[1].date));

        assert!(store.price_history(99, 10).await.unwrap().is_empty());
    });
}

#[test]
fn test_duplicate_dates_are_ignored() {
    tokio_test::block_on(async {
        let store = MemoryStore::new();
        store.add_bars(1, linear_bars(5, 100.0, 1.0)).await;
        store.add_bars(1, linear_bars(5, 500.0, 1.0)).await;

        let history = store.price_history(1, 100).await.unwrap();
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].date, start_date());
        assert_eq!(history[0].close, 100.0);
    });
}

#[test]
fn test_upsert_overwrites_snapshot() {
    tokio_test::block_on(async {
        let store = MemoryStore::new();
        let bars = linear_bars(25, 100.0, 1.0);
        let first = IndicatorEngine::compute(1, &bars, &Quote::new(124.0)).unwrap();
        let second = IndicatorEngine::compute(1, &bars[..20], &Quote::new(119.0)).unwrap();

        assert!(store.snapshot(1).await.unwrap().is_none());
        store.upsert_snapshot(&first).await.unwrap();
        store.upsert_snapshot(&second).await.unwrap();

        assert_eq!(store.snapshot_count().await, 1);
        assert_eq!(store.snapshot(1).await.unwrap(), Some(second));
    });
}

#[test]
fn test_injected_write_failure() {
    tokio_test::block_on(async {
        let store = MemoryStore::new();
        store.fail_writes_for(1).await;
        let bars = linear_bars(25, 100.0, 1.0);
        let snapshot = IndicatorEngine::compute(1, &bars, &Quote::new(124.0)).unwrap();

        let result = store.upsert_snapshot(&snapshot).await;
        assert!(matches!(
            result,
            Err(StoreError::Write { security_id: 1, .. })
        ));
        assert_eq!(store.snapshot_count().await, 0);
    });
}
