//! In-process store backed by tokio locks, for tests and local seeding.

use crate::db::error::StoreError;
use crate::db::store::IndicatorStore;
use crate::models::bar::{PriceBar, Security};
use crate::models::snapshot::IndicatorSnapshot;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    securities: RwLock<HashMap<i64, Security>>,
    bars: RwLock<HashMap<i64, Vec<PriceBar>>>,
    snapshots: RwLock<HashMap<i64, IndicatorSnapshot>>,
    failing_writes: RwLock<HashSet<i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a security.
    pub async fn add_security(&self, security: Security) {
        self.securities.write().await.insert(security.id, security);
    }

    /// Record bars for a security. A bar for an already stored date is
    /// ignored, matching the unique `(security, date)` constraint.
    pub async fn add_bars(&self, security_id: i64, bars: Vec<PriceBar>) {
        let mut all = self.bars.write().await;
        let series = all.entry(security_id).or_default();
        for bar in bars {
            if !series.iter().any(|b| b.date == bar.date) {
                series.push(bar);
            }
        }
        series.sort_by_key(|b| b.date);
    }

    /// Make every subsequent snapshot write for `security_id` fail.
    pub async fn fail_writes_for(&self, security_id: i64) {
        self.failing_writes.write().await.insert(security_id);
    }

    pub async fn snapshot_count(&self) -> usize {
        self.snapshots.read().await.len()
    }
}

#[async_trait]
impl IndicatorStore for MemoryStore {
    async fn list_securities(&self) -> Result<Vec<Security>, StoreError> {
        let mut securities: Vec<Security> =
            self.securities.read().await.values().cloned().collect();
        securities.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Ok(securities)
    }

    async fn price_history(
        &self,
        security_id: i64,
        limit: usize,
    ) -> Result<Vec<PriceBar>, StoreError> {
        let all = self.bars.read().await;
        let Some(series) = all.get(&security_id) else {
            return Ok(Vec::new());
        };
        let start = series.len().saturating_sub(limit);
        Ok(series[start..].to_vec())
    }

    async fn snapshot(&self, security_id: i64) -> Result<Option<IndicatorSnapshot>, StoreError> {
        Ok(self.snapshots.read().await.get(&security_id).cloned())
    }

    async fn upsert_snapshot(&self, snapshot: &IndicatorSnapshot) -> Result<(), StoreError> {
        if self
            .failing_writes
            .read()
            .await
            .contains(&snapshot.security_id)
        {
            return Err(StoreError::Write {
                security_id: snapshot.security_id,
                reason: "write rejected by store".to_string(),
            });
        }
        self.snapshots
            .write()
            .await
            .insert(snapshot.security_id, snapshot.clone());
        Ok(())
    }
}
