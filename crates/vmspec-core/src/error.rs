//! Error types for vmspec-core

use std::num::ParseIntError;

/// Result type for vmspec-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing option values and disk descriptors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token that should have been an integer was not
    #[error("Invalid integer {input:?}: {source}")]
    InvalidInteger {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Malformed size literal in a disk descriptor
    #[error("Invalid disk size {input:?}: {source}")]
    InvalidSize {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Disk descriptor key outside of `file`, `size` and `format`
    #[error("Unknown disk config: {key}")]
    UnknownKey { key: String },
}

impl Error {
    /// Returns true for the malformed-number family of errors
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidInteger { .. } | Self::InvalidSize { .. })
    }
}
