//! Shared data models spanning the engine layers.

pub mod bar;
pub mod indicators;
pub mod snapshot;

pub use bar::{PriceBar, Quote, Security};
pub use indicators::{
    BollingerBands, EmaDirection, MacdIndicator, SupportResistance, VolumeAnalysis,
};
pub use snapshot::{IndicatorSnapshot, OverallSignal, TrendDirection, UnknownLabel};
