//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a docmap.toml, and if present we load settings from there.
//! This provides id deduplication, highlighting, page headings and the browser layout.

use crate::builder::ParseOptions;
use crate::highlight::DEFAULT_THEME;
use crate::render::page::PageOptions;
use facet::Facet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "docmap.toml";

#[derive(Debug, Error)]
/// Why a configuration file was not used.
pub enum ConfigError {
    /// No file exists at the path.
    #[error("{} does not exist", path.display())]
    Missing {
        /// File that was looked up.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was looked up.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("{} is malformed: {message}", path.display())]
    Parse {
        /// File that was looked up.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from docmap.toml or falling back to defaults.
pub struct Config {
    #[facet(default = true)]
    /// Suffix colliding section ids so every id names one section.
    pub dedupe_ids: bool,
    #[facet(default = false)]
    /// Run the syntax highlighter over rendered HTML.
    pub highlight: bool,
    #[facet(default = DEFAULT_THEME.to_string())]
    /// Syntect theme used when highlighting.
    pub theme: String,
    #[facet(default = "Table of Contents".to_string())]
    /// Heading above the outline.
    pub toc_heading: String,
    #[facet(default = "Content".to_string())]
    /// Heading above the document body.
    pub content_heading: String,
    #[facet(default = 35)]
    /// Share of the terminal width (percent) given to the outline pane.
    pub outline_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dedupe_ids: true,
            highlight: false,
            theme: DEFAULT_THEME.to_string(),
            toc_heading: "Table of Contents".to_string(),
            content_heading: "Content".to_string(),
            outline_width: 35,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from docmap.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from the given file.
    ///
    /// A missing file yields the defaults. A file that cannot be read or does not parse is
    /// ignored with a warning, so a typo never blocks rendering.
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(config) => config,
            Err(ConfigError::Missing { .. }) => Self::default(),
            Err(e) => {
                log::warn!("ignoring configuration: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    /// Load configuration from a file the user named explicitly.
    ///
    /// Unlike [`Config::load_from`], a missing file is reported.
    pub fn load_requested(path: &Path) -> Self {
        Self::read(path).unwrap_or_else(|e| {
            log::warn!("ignoring configuration: {e}");
            Self::default()
        })
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file is absent, unreadable or malformed.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let config =
            facet_toml::from_str::<Self>(&contents).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    #[must_use]
    /// Parser settings derived from this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            dedupe_ids: self.dedupe_ids,
        }
    }

    #[must_use]
    /// Page settings derived from this configuration, titled after the document.
    pub fn page_options(&self, title: &str) -> PageOptions {
        PageOptions {
            title: title.to_string(),
            toc_heading: self.toc_heading.clone(),
            content_heading: self.content_heading.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
