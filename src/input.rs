//! Where document text comes from.
//!
//! A source hands back the whole document or fails; there is no partial read and no retry.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
/// Failure to obtain the document text.
pub enum SourceError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The file exists but is not UTF-8 text.
    #[error("{} is not valid UTF-8", path.display())]
    Encoding {
        /// File that was requested.
        path: PathBuf,
    },

    /// Standard input could not be read.
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
}

/// Supplies raw document text on request.
pub trait DocumentSource {
    /// Human-readable name of the document, used for titles and logs.
    fn name(&self) -> String;

    /// Reads the whole document.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the text cannot be obtained.
    fn fetch(&self) -> Result<String, SourceError>;
}

/// Document stored in a file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    /// Creates a source reading the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    fn fetch(&self) -> Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::InvalidData {
                SourceError::Encoding {
                    path: self.path.clone(),
                }
            } else {
                SourceError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })
    }
}

/// Document piped through standard input.
pub struct StdinSource;

impl DocumentSource for StdinSource {
    fn name(&self) -> String {
        "stdin".to_string()
    }

    fn fetch(&self) -> Result<String, SourceError> {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(SourceError::Stdin)?;
        Ok(text)
    }
}

#[must_use]
/// Picks the source for a command-line path, with `-` meaning standard input.
pub fn source_for(path: &Path) -> Box<dyn DocumentSource> {
    if path.as_os_str() == STDIN_PATH {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(path))
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
