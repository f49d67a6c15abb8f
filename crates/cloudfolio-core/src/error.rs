//! Error types for Cloudfolio

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or exporting portfolio content.
///
/// Rendering itself never fails; these only surface at load time.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content file could not be read
    #[error("Failed to read content file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid portfolio JSON
    #[error("Invalid content JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// Content could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result alias for content operations
pub type Result<T> = std::result::Result<T, ContentError>;
