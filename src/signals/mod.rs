//! Trend classification, overall signal scoring and the snapshot engine.

pub mod engine;
pub mod overall;
pub mod scoring;
pub mod trend;

pub use engine::*;
pub use overall::*;
pub use scoring::*;
pub use trend::*;
