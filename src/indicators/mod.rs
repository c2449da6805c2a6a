//! Indicator calculations over ascending daily bars.
//!
//! Every function gates on its own minimum window and returns `None` (or a
//! neutral value where documented) instead of failing on short history.

pub mod momentum;
pub mod position;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use momentum::*;
pub use position::*;
pub use structure::*;
pub use trend::*;
pub use volatility::*;
pub use volume::*;
