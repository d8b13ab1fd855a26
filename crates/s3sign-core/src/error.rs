//! Error types for the s3sign core.

use s3sign_auth::AuthError;

/// Errors raised while validating configuration and endpoint inputs.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Region identifier is empty or contains characters outside `a-z 0-9 -`.
    #[error("invalid region: {0:?}")]
    InvalidRegion(String),

    /// Domain suffix is empty or looks like a URL rather than a host suffix.
    #[error("invalid domain: {0:?}")]
    InvalidDomain(String),

    /// Bucket name cannot be used as a virtual-hosted DNS label.
    #[error("invalid bucket name: {0:?} ({1})")]
    InvalidBucket(String, &'static str),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Credential or canonicalization values rejected by the signer.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
