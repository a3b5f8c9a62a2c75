//! Crate-wide error type.

use crate::input::SourceError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Everything that can stop a render.
pub enum Error {
    /// The document could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Rendered output could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The section tree could not be serialised.
    #[error("failed to serialise section tree: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested highlighting theme is not bundled.
    #[error("unknown highlighting theme `{0}`")]
    UnknownTheme(String),

    /// Terminal or standard stream failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
