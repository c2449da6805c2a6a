//! The per-security indicator snapshot and its label enums.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::indicators::EmaDirection;

/// A stored label string that does not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown label: {0}")]
pub struct UnknownLabel(pub String);

/// Five-level trend classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    StrongBullish,
    Bullish,
    #[default]
    Neutral,
    Bearish,
    StrongBearish,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::StrongBullish => "strong_bullish",
            TrendDirection::Bullish => "bullish",
            TrendDirection::Neutral => "neutral",
            TrendDirection::Bearish => "bearish",
            TrendDirection::StrongBearish => "strong_bearish",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendDirection {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strong_bullish" => Ok(TrendDirection::StrongBullish),
            "bullish" => Ok(TrendDirection::Bullish),
            "neutral" => Ok(TrendDirection::Neutral),
            "bearish" => Ok(TrendDirection::Bearish),
            "strong_bearish" => Ok(TrendDirection::StrongBearish),
            other => Err(UnknownLabel(other.to_string())),
        }
    }
}

/// Five-level composite recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallSignal {
    StrongBuy,
    Buy,
    #[default]
    Hold,
    Sell,
    StrongSell,
}

impl OverallSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallSignal::StrongBuy => "strong_buy",
            OverallSignal::Buy => "buy",
            OverallSignal::Hold => "hold",
            OverallSignal::Sell => "sell",
            OverallSignal::StrongSell => "strong_sell",
        }
    }
}

impl fmt::Display for OverallSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverallSignal {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strong_buy" => Ok(OverallSignal::StrongBuy),
            "buy" => Ok(OverallSignal::Buy),
            "hold" => Ok(OverallSignal::Hold),
            "sell" => Ok(OverallSignal::Sell),
            "strong_sell" => Ok(OverallSignal::StrongSell),
            other => Err(UnknownLabel(other.to_string())),
        }
    }
}

/// Latest derived indicators for one security.
///
/// Recomputed wholesale on every run and overwritten in place; optional
/// fields stay `None` when the history is too short for that indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub security_id: i64,
    /// Date of the newest bar that went into the computation.
    pub as_of: NaiveDate,
    pub bars_used: usize,

    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,
    pub ema_200: Option<f64>,
    pub ema_200_direction: Option<EmaDirection>,

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

    pub trend_direction: TrendDirection,
    pub trend_strength: u32,
    pub overall_signal: OverallSignal,
    pub signal_strength: u32,
}
