//! Persistence for reader progress.
//!
//! The engine keeps progress in memory only. This crate saves and restores
//! [`UserProgress`](newsbuddy_types::UserProgress) snapshots, together with
//! the daily streak clock, as versioned JSON and loads
//! [`ProgressRules`](newsbuddy_types::ProgressRules) from configuration
//! files. Loaded snapshots are validated before the engine
//! adopts them.

mod config;
mod error;
mod rules;
mod snapshot;

pub use config::StorageConfig;
pub use error::StorageError;
pub use rules::{load_rules, rules_from_json};
pub use snapshot::{
    JsonFileStore, MemoryStore, ReaderSession, SNAPSHOT_VERSION, SavedProgress, SnapshotStore,
    open_store,
};
