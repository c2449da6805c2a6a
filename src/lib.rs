//! paperdesk: technical indicator engine for the paper-trading desk.
//!
//! Reads stored daily bars per security, derives moving averages, RSI,
//! MACD, Bollinger Bands, support/resistance and volume ratios, and folds
//! them into a trend classification and an overall signal.

pub mod common;
pub mod config;
pub mod db;
pub mod indicators;
pub mod jobs;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod signals;
