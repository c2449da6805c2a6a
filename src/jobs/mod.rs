//! Indicator batch job over all securities

pub mod batch;
pub mod types;

pub use batch::IndicatorBatch;
pub use types::{BatchReport, LabelPair, SecurityOutcome, SkipReason};
