//! Storage interface consumed by the indicator batch.

use crate::db::error::StoreError;
use crate::models::bar::{PriceBar, Security};
use crate::models::snapshot::IndicatorSnapshot;
use async_trait::async_trait;

#[async_trait]
pub trait IndicatorStore: Send + Sync {
    /// All known securities, ordered by symbol.
    async fn list_securities(&self) -> Result<Vec<Security>, StoreError>;

    /// The newest `limit` bars for a security, returned oldest first.
    async fn price_history(
        &self,
        security_id: i64,
        limit: usize,
    ) -> Result<Vec<PriceBar>, StoreError>;

    /// The stored snapshot for a security, if one was ever written.
    async fn snapshot(&self, security_id: i64) -> Result<Option<IndicatorSnapshot>, StoreError>;

    /// Insert the snapshot or overwrite the existing one for its security.
    async fn upsert_snapshot(&self, snapshot: &IndicatorSnapshot) -> Result<(), StoreError>;
}
