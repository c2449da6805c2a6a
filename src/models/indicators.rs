use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub line: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportResistance {
    pub support: f64,
    pub resistance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeAnalysis {
    /// 20-day mean volume, truncated.
    pub average: i64,
    /// Current volume over the average; unset when the average is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
}

/// Slope of the 200-period EMA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmaDirection {
    Up,
    Down,
    Sideways,
    Neutral,
}

impl EmaDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmaDirection::Up => "up",
            EmaDirection::Down => "down",
            EmaDirection::Sideways => "sideways",
            EmaDirection::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EmaDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmaDirection {
    type Err = super::UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(EmaDirection::Up),
            "down" => Ok(EmaDirection::Down),
            "sideways" => Ok(EmaDirection::Sideways),
            "neutral" => Ok(EmaDirection::Neutral),
            other => Err(super::UnknownLabel(other.to_string())),
        }
    }
}
