//! Error types for snapshot loading and board actions.

use crate::analysis::{SortKey, Table};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading data or applying user actions.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("failed to read snapshot {}: {source}", .path.display())]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot {}: {source}", .path.display())]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),

    #[error("'{key}' is not a column of the {table} table")]
    KeyNotInTable { key: SortKey, table: Table },

    #[error("invalid action '{input}': {reason}")]
    InvalidAction { input: String, reason: String },

    #[error("page size must be at least 1")]
    InvalidPageSize,
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;
