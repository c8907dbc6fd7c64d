//! Feed error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while refreshing the item feed
///
/// A failed refresh never touches the snapshot already in use; the caller
/// can simply refresh again.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Failed to read the item source
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Item source was not a JSON array of items
    #[error("Malformed item list: {0}")]
    Parse(#[from] serde_json::Error),

    /// Provider-specific failure
    #[error("Item provider failed: {0}")]
    Provider(String),
}

/// Result type for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;
