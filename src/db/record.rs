//! Column mapping between `IndicatorSnapshot` and `indicator_snapshots`.
//!
//! Statements and bind parameters are both driven by `SNAPSHOT_COLUMNS`, so
//! positional `$n` placeholders always line up with their column.

use crate::db::error::StoreError;
use crate::models::indicators::EmaDirection;
use crate::models::snapshot::{IndicatorSnapshot, OverallSignal, TrendDirection};
use chrono::NaiveDate;
use tokio_postgres::types::ToSql;
use tokio_postgres::Row;

pub const SNAPSHOT_COLUMN_COUNT: usize = 30;

/// Stored columns in bind order. `updated_at` is stamped by the database.
pub const SNAPSHOT_COLUMNS: [&str; SNAPSHOT_COLUMN_COUNT] = [
    "security_id",
    "as_of",
    "bars_used",
    "sma_20",
    "sma_50",
    "sma_200",
    "ema_12",
    "ema_26",
    "ema_200",
    "ema_200_direction",
    "macd_line",
    "macd_signal",
    "macd_histogram",
    "rsi_14",
    "bb_upper",
    "bb_middle",
    "bb_lower",
    "bb_width",
    "support_level",
    "resistance_level",
    "volume_sma_20",
    "volume_ratio",
    "price_vs_sma20",
    "price_vs_sma50",
    "price_vs_sma200",
    "price_vs_ema200",
    "trend_direction",
    "trend_strength",
    "overall_signal",
    "signal_strength",
];

pub fn select_statement() -> String {
    format!(
        "SELECT {} FROM indicator_snapshots WHERE security_id = $1",
        SNAPSHOT_COLUMNS.join(", ")
    )
}

/// Insert, or overwrite every column of the existing row for the security.
pub fn upsert_statement() -> String {
    let placeholders: Vec<String> = (1..=SNAPSHOT_COLUMN_COUNT)
        .map(|i| format!("${}", i))
        .collect();
    let updates: Vec<String> = SNAPSHOT_COLUMNS[1..]
        .iter()
        .map(|column| format!("{0} = EXCLUDED.{0}", column))
        .collect();

    format!(
        "INSERT INTO indicator_snapshots ({}, updated_at) VALUES ({}, now()) \
         ON CONFLICT (security_id) DO UPDATE SET {}, updated_at = now()",
        SNAPSHOT_COLUMNS.join(", "),
        placeholders.join(", "),
        updates.join(", ")
    )
}

/// A snapshot in its stored column types: counts as `INTEGER`, labels as
/// `TEXT`.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRecord {
    pub security_id: i64,
    pub as_of: NaiveDate,
    pub bars_used: i32,
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,
    pub ema_200: Option<f64>,
    pub ema_200_direction: Option<String>,
    pub macd_line: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub rsi_14: f64,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub bb_width: Option<f64>,
    pub support_level: Option<f64>,
    pub resistance_level: Option<f64>,
    pub volume_sma_20: Option<i64>,
    pub volume_ratio: Option<f64>,
    pub price_vs_sma20: Option<f64>,
    pub price_vs_sma50: Option<f64>,
    pub price_vs_sma200: Option<f64>,
    pub price_vs_ema200: Option<f64>,
    pub trend_direction: String,
    pub trend_strength: i32,
    pub overall_signal: String,
    pub signal_strength: i32,
}

impl SnapshotRecord {
    pub fn from_snapshot(snapshot: &IndicatorSnapshot) -> Result<Self, StoreError> {
        Ok(Self {
            security_id: snapshot.security_id,
            as_of: snapshot.as_of,
            bars_used: to_integer(snapshot.bars_used as u64, "bars_used")?,
            sma_20: snapshot.sma_20,
            sma_50: snapshot.sma_50,
            sma_200: snapshot.sma_200,
            ema_12: snapshot.ema_12,
            ema_26: snapshot.ema_26,
            ema_200: snapshot.ema_200,
            ema_200_direction: snapshot.ema_200_direction.map(|d| d.as_str().to_string()),
            macd_line: snapshot.macd_line,
            macd_signal: snapshot.macd_signal,
            macd_histogram: snapshot.macd_histogram,
            rsi_14: snapshot.rsi_14,
            bb_upper: snapshot.bb_upper,
            bb_middle: snapshot.bb_middle,
            bb_lower: snapshot.bb_lower,
            bb_width: snapshot.bb_width,
            support_level: snapshot.support_level,
            resistance_level: snapshot.resistance_level,
            volume_sma_20: snapshot.volume_sma_20,
            volume_ratio: snapshot.volume_ratio,
            price_vs_sma20: snapshot.price_vs_sma20,
            price_vs_sma50: snapshot.price_vs_sma50,
            price_vs_sma200: snapshot.price_vs_sma200,
            price_vs_ema200: snapshot.price_vs_ema200,
            trend_direction: snapshot.trend_direction.as_str().to_string(),
            trend_strength: to_integer(snapshot.trend_strength as u64, "trend_strength")?,
            overall_signal: snapshot.overall_signal.as_str().to_string(),
            signal_strength: to_integer(snapshot.signal_strength as u64, "signal_strength")?,
        })
    }

    /// Decode back into a snapshot. Unknown labels and negative counts are
    /// rejected as `StoreError::Decode`.
    pub fn into_snapshot(self) -> Result<IndicatorSnapshot, StoreError> {
        Ok(IndicatorSnapshot {
            security_id: self.security_id,
            as_of: self.as_of,
            bars_used: to_unsigned(self.bars_used, "bars_used")? as usize,
            sma_20: self.sma_20,
            sma_50: self.sma_50,
            sma_200: self.sma_200,
            ema_12: self.ema_12,
            ema_26: self.ema_26,
            ema_200: self.ema_200,
            ema_200_direction: self
                .ema_200_direction
                .as_deref()
                .map(str::parse::<EmaDirection>)
                .transpose()?,
            macd_line: self.macd_line,
            macd_signal: self.macd_signal,
            macd_histogram: self.macd_histogram,
            rsi_14: self.rsi_14,
            bb_upper: self.bb_upper,
            bb_middle: self.bb_middle,
            bb_lower: self.bb_lower,
            bb_width: self.bb_width,
            support_level: self.support_level,
            resistance_level: self.resistance_level,
            volume_sma_20: self.volume_sma_20,
            volume_ratio: self.volume_ratio,
            price_vs_sma20: self.price_vs_sma20,
            price_vs_sma50: self.price_vs_sma50,
            price_vs_sma200: self.price_vs_sma200,
            price_vs_ema200: self.price_vs_ema200,
            trend_direction: self.trend_direction.parse::<TrendDirection>()?,
            trend_strength: to_unsigned(self.trend_strength, "trend_strength")?,
            overall_signal: self.overall_signal.parse::<OverallSignal>()?,
            signal_strength: to_unsigned(self.signal_strength, "signal_strength")?,
        })
    }

    pub fn from_row(row: &Row) -> Result<Self, StoreError> {
        Ok(Self {
            security_id: row.try_get("security_id")?,
            as_of: row.try_get("as_of")?,
            bars_used: row.try_get("bars_used")?,
            sma_20: row.try_get("sma_20")?,
            sma_50: row.try_get("sma_50")?,
            sma_200: row.try_get("sma_200")?,
            ema_12: row.try_get("ema_12")?,
            ema_26: row.try_get("ema_26")?,
            ema_200: row.try_get("ema_200")?,
            ema_200_direction: row.try_get("ema_200_direction")?,
            macd_line: row.try_get("macd_line")?,
            macd_signal: row.try_get("macd_signal")?,
            macd_histogram: row.try_get("macd_histogram")?,
            rsi_14: row.try_get("rsi_14")?,
            bb_upper: row.try_get("bb_upper")?,
            bb_middle: row.try_get("bb_middle")?,
            bb_lower: row.try_get("bb_lower")?,
            bb_width: row.try_get("bb_width")?,
            support_level: row.try_get("support_level")?,
            resistance_level: row.try_get("resistance_level")?,
            volume_sma_20: row.try_get("volume_sma_20")?,
            volume_ratio: row.try_get("volume_ratio")?,
            price_vs_sma20: row.try_get("price_vs_sma20")?,
            price_vs_sma50: row.try_get("price_vs_sma50")?,
            price_vs_sma200: row.try_get("price_vs_sma200")?,
            price_vs_ema200: row.try_get("price_vs_ema200")?,
            trend_direction: row.try_get("trend_direction")?,
            trend_strength: row.try_get("trend_strength")?,
            overall_signal: row.try_get("overall_signal")?,
            signal_strength: row.try_get("signal_strength")?,
        })
    }

    /// Bind parameters in `SNAPSHOT_COLUMNS` order.
    pub fn params(&self) -> [&(dyn ToSql + Sync); SNAPSHOT_COLUMN_COUNT] {
        [
            &self.security_id,
            &self.as_of,
            &self.bars_used,
            &self.sma_20,
            &self.sma_50,
            &self.sma_200,
            &self.ema_12,
            &self.ema_26,
            &self.ema_200,
            &self.ema_200_direction,
            &self.macd_line,
            &self.macd_signal,
            &self.macd_histogram,
            &self.rsi_14,
            &self.bb_upper,
            &self.bb_middle,
            &self.bb_lower,
            &self.bb_width,
            &self.support_level,
            &self.resistance_level,
            &self.volume_sma_20,
            &self.volume_ratio,
            &self.price_vs_sma20,
            &self.price_vs_sma50,
            &self.price_vs_sma200,
            &self.price_vs_ema200,
            &self.trend_direction,
            &self.trend_strength,
            &self.overall_signal,
            &self.signal_strength,
        ]
    }
}

fn to_integer(value: u64, column: &str) -> Result<i32, StoreError> {
    i32::try_from(value)
        .map_err(|_| StoreError::Decode(format!("{} {} does not fit INTEGER", column, value)))
}

fn to_unsigned(value: i32, column: &str) -> Result<u32, StoreError> {
    u32::try_from(value).map_err(|_| StoreError::Decode(format!("negative {}: {}", column, value)))
}
