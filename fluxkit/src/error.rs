//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Message reported when a placeholder is constructed from an archived form.
pub const UNSUPPORTED_ARCHIVE: &str =
    "constructing a placeholder from an archived representation is not supported";

/// Failure to load a style registry.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read style file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid style document: {0}")]
    Parse(#[from] serde_json::Error),
}
