//! Client error types.

use s3sign_auth::AuthError;
use s3sign_core::CoreError;
use s3sign_xml::XmlError;

/// Errors returned by [`crate::S3Client`].
///
/// A non-2xx response from the storage provider is not an error; it is
/// returned to the caller as a response.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Configuration or endpoint input rejected.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Signing input rejected.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Request body could not be serialized.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// The HTTP exchange failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The operation or assembled request is malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Convenience result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
