use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No classifier for language '{tag}' ({path})")]
    UnknownLanguage { path: PathBuf, tag: String },

    #[error("Failed to open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read failed in '{path}' after {lines_read} lines: {source}")]
    PartialRead {
        path: PathBuf,
        lines_read: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Path of the file the error is about, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::UnknownLanguage { path, .. }
            | Self::FileOpen { path, .. }
            | Self::PartialRead { path, .. } => Some(path),
            Self::Walk(_) | Self::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
