//! Error types for optfile-core

use crate::OptionType;

pub type Result<T> = std::result::Result<T, Error>;

/// Setup-time failures. Malformed directive content is never an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] optfile_source::Error),

    #[error("Option already registered: {key}")]
    DuplicateKey { key: String },

    #[error("Option not found: {key}")]
    NotFound { key: String },

    #[error("Alias cycle detected while resolving {key}")]
    AliasCycle { key: String },

    #[error("Value for {key} does not match its declared type {kind}")]
    TypeMismatch { key: String, kind: OptionType },

    #[error("Invalid schema: {message}")]
    Schema { message: String },
}

impl Error {
    /// Distinct negative status code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            Error::Source(source) => source.code(),
            Error::DuplicateKey { .. } => -2,
            Error::NotFound { .. } => -147,
            Error::AliasCycle { .. } => -148,
            Error::TypeMismatch { .. } => -149,
            Error::Schema { .. } => -151,
        }
    }
}
