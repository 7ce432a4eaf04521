//! Domain errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a build or a command
#[derive(Error, Debug)]
pub enum SiteError {
    /// The content directory is missing or cannot be listed
    #[error("Cannot read content directory {path:?}: {source}")]
    ContentDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content file could not be read
    #[error("Cannot read content file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `new` refuses to overwrite an existing album file
    #[error("Album already exists: {0:?}")]
    AlbumExists(PathBuf),

    /// `list` was asked for something it does not know
    #[error("Unknown type: {0}. Available: albums, tags, routes")]
    UnknownListType(String),
}

/// Result alias for content-level operations
pub type Result<T> = std::result::Result<T, SiteError>;
