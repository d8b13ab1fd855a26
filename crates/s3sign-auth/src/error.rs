//! Error types for SigV4 signing.
//!
//! Signing never recovers locally: every malformed input is rejected with an
//! [`AuthError`] before any cryptographic work starts.

/// Errors that can occur while producing an AWS Signature Version 4 artifact.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A signing input is empty or malformed.
    #[error("Invalid signing input: {0}")]
    InvalidInput(String),

    /// The HTTP method cannot be signed by this client.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// A timestamp is not in `YYYYMMDDTHHMMSSZ` form.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A computed header value contains bytes that are not valid in HTTP headers.
    #[error("Invalid header value for {0}")]
    InvalidHeaderValue(String),
}
