//! Typed operation descriptors.
//!
//! Each S3 operation is a small struct that knows its HTTP method, target
//! path, query, extra headers and body. Descriptors validate their inputs when
//! they are constructed, so a descriptor that exists can always be signed.

use bytes::Bytes;
use http::{HeaderName, HeaderValue, Method};
use s3sign_core::validate_bucket;
use s3sign_xml::{CreateBucketConfiguration, RestoreRequest, to_xml};

use crate::error::{ClientError, ClientResult};

/// Longest object key S3 accepts, in bytes.
pub const MAX_KEY_LEN: usize = 1024;

/// Header granting anonymous read access to an uploaded object.
pub const ACL_HEADER: HeaderName = HeaderName::from_static("x-amz-acl");

/// Header naming the source object of a server-side copy.
pub const COPY_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-amz-copy-source");

/// Header selecting the storage class of a written object.
pub const STORAGE_CLASS_HEADER: HeaderName = HeaderName::from_static("x-amz-storage-class");

/// A request the client knows how to sign.
pub trait S3Operation: Send + Sync {
    /// Operation name used in logs.
    fn name(&self) -> &'static str;

    /// HTTP method.
    fn method(&self) -> Method;

    /// Target bucket.
    fn bucket(&self) -> &str;

    /// Object path inside the bucket; empty for the bucket root.
    fn path(&self) -> &str;

    /// Query parameters in the order they are put on the wire.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Headers added on top of the client defaults. They are sent but not signed.
    fn headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        Vec::new()
    }

    /// Request body, if the operation carries one.
    fn body(&self) -> Option<Bytes> {
        None
    }
}

/// A validated bucket and object key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    bucket: String,
    key: String,
}

impl ObjectLocation {
    /// Validate a bucket and key.
    ///
    /// One leading `/` is optional and stripped; any further slashes belong to
    /// the key. The key must not be empty, must not exceed [`MAX_KEY_LEN`]
    /// bytes and must not contain `?`.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> ClientResult<Self> {
        let bucket = bucket.into();
        validate_bucket(&bucket)?;

        let key = key.into();
        let trimmed = key.strip_prefix('/').unwrap_or(&key);
        if trimmed.is_empty() {
            return Err(ClientError::InvalidRequest(
                "object key is empty".to_owned(),
            ));
        }
        if trimmed.len() > MAX_KEY_LEN {
            return Err(ClientError::InvalidRequest(format!(
                "object key exceeds {MAX_KEY_LEN} bytes"
            )));
        }
        if trimmed.contains('?') {
            return Err(ClientError::InvalidRequest(format!(
                "object key must not contain '?': {key}"
            )));
        }

        Ok(Self {
            bucket,
            key: format!("/{trimmed}"),
        })
    }

    /// Bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key with a leading `/`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

macro_rules! object_operation {
    ($(#[$meta:meta])* $name:ident, $method:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            location: ObjectLocation,
        }

        impl $name {
            /// Validate the bucket and key.
            pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> ClientResult<Self> {
                Ok(Self {
                    location: ObjectLocation::new(bucket, key)?,
                })
            }
        }

        impl S3Operation for $name {
            fn name(&self) -> &'static str {
                stringify!($name)
            }

            fn method(&self) -> Method {
                $method
            }

            fn bucket(&self) -> &str {
                self.location.bucket()
            }

            fn path(&self) -> &str {
                self.location.key()
            }
        }
    };
}

object_operation!(
    /// Download an object.
    GetObject,
    Method::GET
);

object_operation!(
    /// Delete an object.
    DeleteObject,
    Method::DELETE
);

object_operation!(
    /// Fetch an object's metadata without its body.
    HeadObject,
    Method::HEAD
);

/// List the objects of a bucket, optionally under a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBucket {
    bucket: String,
    prefix: Option<String>,
}

impl ListBucket {
    /// List the whole bucket.
    pub fn new(bucket: impl Into<String>) -> ClientResult<Self> {
        let bucket = bucket.into();
        validate_bucket(&bucket)?;
        Ok(Self {
            bucket,
            prefix: None,
        })
    }

    /// Only list keys starting with `prefix`, minus one optional leading `/`. An empty prefix
    /// lists everything.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let prefix = prefix.strip_prefix('/').unwrap_or(&prefix);
        self.prefix = (!prefix.is_empty()).then(|| prefix.to_owned());
        self
    }

    /// The requested prefix.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl S3Operation for ListBucket {
    fn name(&self) -> &'static str {
        "ListBucket"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn path(&self) -> &str {
        ""
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        self.prefix
            .iter()
            .map(|prefix| ("prefix", prefix.clone()))
            .collect()
    }
}

/// Upload an object readable by anyone (`x-amz-acl: public-read`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObject {
    location: ObjectLocation,
    body: Bytes,
}

impl PutObject {
    /// Canned ACL applied to every upload.
    pub const ACL: &str = "public-read";

    /// Validate the bucket and key; the body may be empty.
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        body: impl Into<Bytes>,
    ) -> ClientResult<Self> {
        Ok(Self {
            location: ObjectLocation::new(bucket, key)?,
            body: body.into(),
        })
    }
}

impl S3Operation for PutObject {
    fn name(&self) -> &'static str {
        "PutObject"
    }

    fn method(&self) -> Method {
        Method::PUT
    }

    fn bucket(&self) -> &str {
        self.location.bucket()
    }

    fn path(&self) -> &str {
        self.location.key()
    }

    fn headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        vec![(ACL_HEADER, HeaderValue::from_static(Self::ACL))]
    }

    fn body(&self) -> Option<Bytes> {
        Some(self.body.clone())
    }
}

/// Create a "folder": a zero-byte object whose key ends in `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFolder {
    location: ObjectLocation,
}

impl CreateFolder {
    /// Validate the bucket and folder path, appending `/` when missing.
    pub fn new(bucket: impl Into<String>, path: impl Into<String>) -> ClientResult<Self> {
        let mut path = path.into();
        if !path.ends_with('/') {
            path.push('/');
        }
        Ok(Self {
            location: ObjectLocation::new(bucket, path)?,
        })
    }
}

impl S3Operation for CreateFolder {
    fn name(&self) -> &'static str {
        "CreateFolder"
    }

    fn method(&self) -> Method {
        Method::PUT
    }

    fn bucket(&self) -> &str {
        self.location.bucket()
    }

    fn path(&self) -> &str {
        self.location.key()
    }

    fn body(&self) -> Option<Bytes> {
        Some(Bytes::new())
    }
}

/// Create a bucket in a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBucket {
    bucket: String,
    configuration: CreateBucketConfiguration,
    body: Bytes,
}

impl CreateBucket {
    /// Create the bucket in [`CreateBucketConfiguration::DEFAULT_LOCATION`].
    pub fn new(bucket: impl Into<String>) -> ClientResult<Self> {
        Self::with_configuration(bucket, CreateBucketConfiguration::default())
    }

    /// Create the bucket in `location`.
    pub fn in_location(
        bucket: impl Into<String>,
        location: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::with_configuration(bucket, CreateBucketConfiguration::new(location)?)
    }

    fn with_configuration(
        bucket: impl Into<String>,
        configuration: CreateBucketConfiguration,
    ) -> ClientResult<Self> {
        let bucket = bucket.into();
        validate_bucket(&bucket)?;
        let body = Bytes::from(to_xml(&configuration)?);
        Ok(Self {
            bucket,
            configuration,
            body,
        })
    }

    /// The location constraint sent in the body.
    #[must_use]
    pub fn location_constraint(&self) -> &str {
        self.configuration.location_constraint()
    }
}

impl S3Operation for CreateBucket {
    fn name(&self) -> &'static str {
        "CreateBucket"
    }

    fn method(&self) -> Method {
        Method::PUT
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn path(&self) -> &str {
        "/"
    }

    fn body(&self) -> Option<Bytes> {
        Some(self.body.clone())
    }
}

/// Restore a temporary copy of an archived object (`POST ?restore`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreObject {
    location: ObjectLocation,
    request: RestoreRequest,
    body: Bytes,
}

impl RestoreObject {
    /// Restore for [`RestoreRequest::DEFAULT_DAYS`] days.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> ClientResult<Self> {
        Self::with_request(bucket, key, RestoreRequest::default())
    }

    /// Restore with an explicit request document.
    pub fn with_request(
        bucket: impl Into<String>,
        key: impl Into<String>,
        request: RestoreRequest,
    ) -> ClientResult<Self> {
        let location = ObjectLocation::new(bucket, key)?;
        let body = Bytes::from(to_xml(&request)?);
        Ok(Self {
            location,
            request,
            body,
        })
    }

    /// Days the restored copy stays available.
    #[must_use]
    pub fn days(&self) -> u32 {
        self.request.days()
    }
}

impl S3Operation for RestoreObject {
    fn name(&self) -> &'static str {
        "RestoreObject"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn bucket(&self) -> &str {
        self.location.bucket()
    }

    fn path(&self) -> &str {
        self.location.key()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("restore", String::new())]
    }

    fn body(&self) -> Option<Bytes> {
        Some(self.body.clone())
    }
}

/// Move an object to the `GLACIER` storage class by copying it onto itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlacierObject {
    location: ObjectLocation,
    copy_source: HeaderValue,
}

impl GlacierObject {
    /// Target storage class.
    pub const STORAGE_CLASS: &str = "GLACIER";

    /// Validate the bucket and key.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> ClientResult<Self> {
        let location = ObjectLocation::new(bucket, key)?;
        let source = format!(
            "/{}{}",
            location.bucket(),
            s3sign_auth::canonical::normalize_path(location.key())
        );
        let copy_source = HeaderValue::from_str(&source)
            .map_err(|e| ClientError::InvalidRequest(format!("invalid copy source: {e}")))?;
        Ok(Self {
            location,
            copy_source,
        })
    }
}

impl S3Operation for GlacierObject {
    fn name(&self) -> &'static str {
        "GlacierObject"
    }

    fn method(&self) -> Method {
        Method::PUT
    }

    fn bucket(&self) -> &str {
        self.location.bucket()
    }

    fn path(&self) -> &str {
        self.location.key()
    }

    fn headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        vec![
            (COPY_SOURCE_HEADER, self.copy_source.clone()),
            (
                STORAGE_CLASS_HEADER,
                HeaderValue::from_static(Self::STORAGE_CLASS),
            ),
        ]
    }
}
