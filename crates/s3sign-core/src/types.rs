//! Endpoint types and host resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Signing name of the S3 service.
pub use s3sign_auth::sigv4::S3_SERVICE;

/// Region identifier, e.g. `us-east-1`, `fr-par`, `nyc3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);

impl Region {
    /// Default region.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a region.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidRegion`] unless the value is non-empty, made of
    /// `a-z`, `0-9` and `-`, and neither starts nor ends with `-`.
    pub fn new(region: impl Into<String>) -> CoreResult<Self> {
        let region = region.into();
        let valid = !region.is_empty()
            && region
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
            && !region.starts_with('-')
            && !region.ends_with('-');
        if valid {
            Ok(Self(region))
        } else {
            Err(CoreError::InvalidRegion(region))
        }
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Region {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Region {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0
    }
}

/// Provider domain suffix, e.g. `amazonaws.com`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Domain(String);

impl Domain {
    /// AWS S3.
    pub const AWS: &str = "amazonaws.com";
    /// DigitalOcean Spaces.
    pub const DIGITALOCEAN: &str = "digitaloceanspaces.com";
    /// Scaleway Object Storage.
    pub const SCALEWAY: &str = "scw.cloud";

    /// Domains whose virtual hosts have no `.s3.` segment.
    const WITHOUT_SERVICE_SEGMENT: &[&str] = &[Self::DIGITALOCEAN];

    /// Create a domain suffix.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDomain`] for an empty value, a value with a
    /// scheme, path, port or whitespace, or a value with empty labels.
    pub fn new(domain: impl Into<String>) -> CoreResult<Self> {
        let domain = domain.into();
        let valid = !domain.is_empty()
            && domain
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.')
            && domain.split('.').all(|label| !label.is_empty());
        if valid {
            Ok(Self(domain.to_ascii_lowercase()))
        } else {
            Err(CoreError::InvalidDomain(domain))
        }
    }

    /// Get the domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether hosts under this domain are `{bucket}.{region}.{domain}`
    /// instead of `{bucket}.{service}.{region}.{domain}`.
    #[must_use]
    pub fn omits_service_segment(&self) -> bool {
        Self::WITHOUT_SERVICE_SEGMENT
            .iter()
            .any(|domain| *domain == self.0)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self(Self::AWS.to_owned())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Domain {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Domain> for String {
    fn from(domain: Domain) -> Self {
        domain.0
    }
}

/// Check that a bucket name can be used as the leading label of a virtual host.
///
/// Names must be 3 to 63 characters of `a-z`, `0-9`, `.` and `-`, start and end
/// with a letter or digit, and contain no `..`.
///
/// # Errors
/// Returns [`CoreError::InvalidBucket`] describing the first violated rule.
pub fn validate_bucket(bucket: &str) -> CoreResult<()> {
    let reject = |reason: &'static str| -> CoreResult<()> {
        Err(CoreError::InvalidBucket(bucket.to_owned(), reason))
    };

    if bucket.is_empty() {
        return reject("bucket name is empty");
    }
    if !(3..=63).contains(&bucket.len()) {
        return reject("bucket name must be 3 to 63 characters");
    }
    if !bucket
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'-')
    {
        return reject("bucket name may only contain a-z, 0-9, '.' and '-'");
    }
    let edge_ok = |b: Option<u8>| b.is_some_and(|b| b.is_ascii_alphanumeric());
    if !edge_ok(bucket.bytes().next()) || !edge_ok(bucket.bytes().last()) {
        return reject("bucket name must start and end with a letter or digit");
    }
    if bucket.contains("..") {
        return reject("bucket name must not contain '..'");
    }
    Ok(())
}

/// Resolve the virtual host for a bucket.
///
/// This is the only place host names are derived; both header signing and
/// presigning call it.
///
/// # Examples
///
/// ```
/// use s3sign_core::{Domain, Region, resolve_host};
///
/// let region = Region::new("fr-par").unwrap();
/// let scw = Domain::new("scw.cloud").unwrap();
/// assert_eq!(
///     resolve_host("test-bucket", "s3", &region, &scw),
///     "test-bucket.s3.fr-par.scw.cloud"
/// );
///
/// let spaces = Domain::new("digitaloceanspaces.com").unwrap();
/// assert_eq!(
///     resolve_host("test-bucket", "s3", &region, &spaces),
///     "test-bucket.fr-par.digitaloceanspaces.com"
/// );
/// ```
#[must_use]
pub fn resolve_host(bucket: &str, service: &str, region: &Region, domain: &Domain) -> String {
    if domain.omits_service_segment() {
        format!("{bucket}.{region}.{domain}")
    } else {
        format!("{bucket}.{service}.{region}.{domain}")
    }
}

/// A bucket bound to a region and provider domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    bucket: String,
    region: Region,
    domain: Domain,
}

impl Endpoint {
    /// Create an endpoint, validating the bucket name.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidBucket`] when the bucket name is unusable.
    pub fn new(bucket: impl Into<String>, region: Region, domain: Domain) -> CoreResult<Self> {
        let bucket = bucket.into();
        validate_bucket(&bucket)?;
        Ok(Self {
            bucket,
            region,
            domain,
        })
    }

    /// Bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Region of the credential scope.
    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Provider domain suffix.
    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Always [`S3_SERVICE`].
    #[must_use]
    pub fn service(&self) -> &'static str {
        S3_SERVICE
    }

    /// Virtual host of the bucket.
    #[must_use]
    pub fn host(&self) -> String {
        resolve_host(&self.bucket, S3_SERVICE, &self.region, &self.domain)
    }
}
