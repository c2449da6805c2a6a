//! Composite buy/sell signal combining RSI, MACD, trend and price position.

use crate::models::snapshot::{OverallSignal, TrendDirection};
use crate::signals::scoring::{
    classify_signal, macd_points, position_points, rsi_points, trend_points,
};

/// Everything the overall signal looks at. Absent inputs contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SignalInputs {
    pub rsi: Option<f64>,
    pub macd_line: Option<f64>,
    pub macd_signal: Option<f64>,
    pub trend: TrendDirection,
    pub price_vs_sma20: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalAssessment {
    pub score: i32,
    pub signal: OverallSignal,
    pub strength: u32,
}

pub fn evaluate_signal(inputs: &SignalInputs) -> SignalAssessment {
    let mut score = 0;

    if let Some(rsi) = inputs.rsi {
        score += rsi_points(rsi);
    }

    if let (Some(line), Some(signal)) = (inputs.macd_line, inputs.macd_signal) {
        score += macd_points(line, signal);
    }

    score += trend_points(inputs.trend);

    if let Some(position) = inputs.price_vs_sma20 {
        score += position_points(position);
    }

    let (signal, strength) = classify_signal(score);
    SignalAssessment {
        score,
        signal,
        strength,
    }
}
