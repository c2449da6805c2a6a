//! PostgreSQL store for securities, daily bars and indicator snapshots

use crate::config;
use crate::db::error::StoreError;
use crate::db::record::{select_statement, upsert_statement, SnapshotRecord};
use crate::db::store::IndicatorStore;
use crate::models::bar::{PriceBar, Security};
use crate::models::snapshot::IndicatorSnapshot;
use async_trait::async_trait;
use tokio_postgres::{Client, NoTls};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS securities (
    id BIGSERIAL PRIMARY KEY,
    symbol TEXT NOT NULL UNIQUE,
    current_price DOUBLE PRECISION,
    volume BIGINT
);

CREATE TABLE IF NOT EXISTS price_bars (
    security_id BIGINT NOT NULL REFERENCES securities(id) ON DELETE CASCADE,
    date DATE NOT NULL,
    open DOUBLE PRECISION NOT NULL,
    high DOUBLE PRECISION NOT NULL,
    low DOUBLE PRECISION NOT NULL,
    close DOUBLE PRECISION NOT NULL,
    volume BIGINT NOT NULL,
    PRIMARY KEY (security_id, date)
);

CREATE TABLE IF NOT EXISTS indicator_snapshots (
    security_id BIGINT PRIMARY KEY REFERENCES securities(id) ON DELETE CASCADE,
    as_of DATE NOT NULL,
    bars_used INTEGER NOT NULL,
    sma_20 DOUBLE PRECISION,
    sma_50 DOUBLE PRECISION,
    sma_200 DOUBLE PRECISION,
    ema_12 DOUBLE PRECISION,
    ema_26 DOUBLE PRECISION,
    ema_200 DOUBLE PRECISION,
    ema_200_direction TEXT,
    macd_line DOUBLE PRECISION,
    macd_signal DOUBLE PRECISION,
    macd_histogram DOUBLE PRECISION,
    rsi_14 DOUBLE PRECISION NOT NULL,
    bb_upper DOUBLE PRECISION,
    bb_middle DOUBLE PRECISION,
    bb_lower DOUBLE PRECISION,
    bb_width DOUBLE PRECISION,
    support_level DOUBLE PRECISION,
    resistance_level DOUBLE PRECISION,
    volume_sma_20 BIGINT,
    volume_ratio DOUBLE PRECISION,
    price_vs_sma20 DOUBLE PRECISION,
    price_vs_sma50 DOUBLE PRECISION,
    price_vs_sma200 DOUBLE PRECISION,
    price_vs_ema200 DOUBLE PRECISION,
    trend_direction TEXT NOT NULL,
    trend_strength INTEGER NOT NULL,
    overall_signal TEXT NOT NULL,
    signal_strength INTEGER NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

pub struct PostgresStore {
    client: Client,
}

impl PostgresStore {
    /// Connect using `DATABASE_URL` and make sure the schema exists.
    pub async fn new() -> Result<Self, StoreError> {
        Self::connect(&config::get_database_url()).await
    }

    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let (client, connection) = tokio_postgres::connect(url, NoTls)
            .await
            .map_err(StoreError::Connection)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "PostgreSQL connection error");
            }
        });

        let store = Self { client };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        self.client.batch_execute(SCHEMA).await?;
        Ok(())
    }
}

#[async_trait]
impl IndicatorStore for PostgresStore {
    async fn list_securities(&self) -> Result<Vec<Security>, StoreError> {
        let rows = self
            .client
            .query(
                "SELECT id, symbol, current_price, volume FROM securities ORDER BY symbol",
                &[],
            )
            .await?;

        rows.iter()
            .map(|row| -> Result<Security, StoreError> {
                Ok(Security {
                    id: row.try_get(0)?,
                    symbol: row.try_get(1)?,
                    current_price: row.try_get(2)?,
                    volume: row.try_get(3)?,
                })
            })
            .collect()
    }

    async fn price_history(
        &self,
        security_id: i64,
        limit: usize,
    ) -> Result<Vec<PriceBar>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = self
            .client
            .query(
                "SELECT date, open, high, low, close, volume
                 FROM price_bars
                 WHERE security_id = $1
                 ORDER BY date DESC
                 LIMIT $2",
                &[&security_id, &limit],
            )
            .await?;

        let mut bars = rows
            .iter()
            .map(|row| -> Result<PriceBar, StoreError> {
                Ok(PriceBar {
                    date: row.try_get(0)?,
                    open: row.try_get(1)?,
                    high: row.try_get(2)?,
                    low: row.try_get(3)?,
                    close: row.try_get(4)?,
                    volume: row.try_get(5)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Reverse to get oldest first
        bars.reverse();
        Ok(bars)
    }

    async fn snapshot(&self, security_id: i64) -> Result<Option<IndicatorSnapshot>, StoreError> {
        let row = self
            .client
            .query_opt(&select_statement(), &[&security_id])
            .await?;
        row.as_ref()
            .map(|row| -> Result<IndicatorSnapshot, StoreError> {
                SnapshotRecord::from_row(row)?.into_snapshot()
            })
            .transpose()
    }

    async fn upsert_snapshot(&self, snapshot: &IndicatorSnapshot) -> Result<(), StoreError> {
        let record = SnapshotRecord::from_snapshot(snapshot)?;

        self.client
            .execute(&upsert_statement(), &record.params())
            .await
            .map_err(|e| StoreError::Write {
                security_id: snapshot.security_id,
                reason: e.to_string(),
            })?;

        Ok(())
    }
}
