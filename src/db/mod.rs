//! Persistence for securities, price history and indicator snapshots.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use record::SnapshotRecord;
pub use store::IndicatorStore;
