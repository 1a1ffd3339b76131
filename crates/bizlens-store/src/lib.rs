//! In-memory application state with filtered views and snapshot persistence.

mod app_store;
pub mod filters;
pub mod snapshot;
mod stats;

use thiserror::Error;

pub use app_store::AppStore;
pub use filters::{
    ComplaintFilter, CustomerFilter, Filter, Filters, InsightFilter, InteractionFilter,
    ReviewFilter,
};
pub use snapshot::{Snapshot, SnapshotStore, SCHEMA_VERSION};
pub use stats::DashboardStats;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("snapshot schema version {found} does not match expected {expected}")]
    SchemaMismatch { found: u64, expected: u32 },
}
