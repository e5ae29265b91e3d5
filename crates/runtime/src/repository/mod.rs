//! Persistence adapters: the action log and single-snapshot storage.

mod action_log;
mod error;
mod snapshot_file;

pub use action_log::{ActionLog, ActionLogEntry};
pub use error::RepositoryError;
pub use snapshot_file::{FileSnapshotRepository, SnapshotRepository};
