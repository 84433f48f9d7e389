//! Error types for optfile-source

use std::path::PathBuf;

/// Result type for optfile-source operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening or configuring a line source
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open directive file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid line source configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Negative status code reported to hosts that speak in integers.
    pub fn code(&self) -> i32 {
        match self {
            Self::FileOpen { .. } => -56,
            Self::InvalidConfig { .. } => -150,
        }
    }
}
