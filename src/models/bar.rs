//! Securities and their daily price history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tradable security as known to the desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Security {
    pub id: i64,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
}

impl Security {
    pub fn new(id: i64, symbol: impl Into<String>) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            current_price: None,
            volume: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.current_price = Some(price);
        self
    }

    pub fn with_volume(mut self, volume: i64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// The engine-facing quote, if a current price is known.
    pub fn quote(&self) -> Option<Quote> {
        self.current_price.map(|price| Quote {
            price,
            volume: self.volume,
        })
    }
}

/// Last-known price and volume for a security. The price may differ from
/// the last close when it was taken intraday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
}

impl Quote {
    pub fn new(price: f64) -> Self {
        Self { price, volume: None }
    }

    pub fn with_volume(mut self, volume: i64) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// One trading day of OHLCV data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: i64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

pub fn closes(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}
