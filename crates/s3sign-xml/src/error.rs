//! XML error types.

use std::io;

/// Errors that can occur while serializing a request body.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A field value cannot be represented in the document.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Element name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
