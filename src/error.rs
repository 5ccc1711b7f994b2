//! Error types for chromalink.

use thiserror::Error;

use crate::validate::ValidationError;

/// Result type alias for chromalink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside of the pure conversion functions, which have none.
#[derive(Error, Debug)]
pub enum Error {
    /// Text typed into a field was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A channel name was not recognized.
    #[error("Unknown channel: {name:?}")]
    UnknownChannel {
        /// The rejected name.
        name: String,
    },

    /// A hex color could not be parsed.
    #[error("Invalid hex color: {input:?}")]
    InvalidHex {
        /// The rejected text.
        input: String,
    },

    /// A configuration file could not be read.
    #[error("Failed to read config {path}")]
    ConfigIo {
        /// The path that was read.
        path: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration could not be parsed.
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
