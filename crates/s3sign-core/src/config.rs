//! Client configuration.
//!
//! Provides [`S3ClientConfig`] for configuring the s3sign client. Values are
//! loaded from environment variables, accepting both the `S3_*` names and the
//! standard `AWS_*` credential variables.

use std::fmt;

use s3sign_auth::{Canonicalization, Credentials};
use serde::{Deserialize, Serialize};
use tracing::warn;
use typed_builder::TypedBuilder;

use crate::error::{CoreError, CoreResult};
use crate::types::{Domain, Region};

/// Client configuration.
///
/// All fields have defaults. Configuration can be loaded from environment
/// variables via [`S3ClientConfig::from_env`]. The secret key is never
/// serialized and never printed by `Debug`.
///
/// # Examples
///
/// ```
/// use s3sign_core::S3ClientConfig;
///
/// let config = S3ClientConfig::default();
/// assert_eq!(config.region, "us-east-1");
/// assert_eq!(config.domain, "amazonaws.com");
/// ```
#[derive(Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct S3ClientConfig {
    /// Access key id.
    #[builder(default, setter(into))]
    #[serde(default)]
    pub access_key_id: String,

    /// Secret access key.
    #[builder(default, setter(into))]
    #[serde(default, skip_serializing)]
    pub secret_access_key: String,

    /// Region of the credential scope and of the virtual host.
    #[builder(default = String::from(Region::DEFAULT), setter(into))]
    #[serde(default = "default_region")]
    pub region: String,

    /// Provider domain suffix.
    #[builder(default = String::from(Domain::AWS), setter(into))]
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Canonicalization mode.
    #[builder(default)]
    #[serde(default)]
    pub canonicalization: Canonicalization,

    /// Headers added to every request before signing.
    #[builder(default)]
    #[serde(default)]
    pub default_headers: Vec<(String, String)>,

    /// Transport timeout in seconds.
    #[builder(default = 60)]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"), setter(into))]
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_region() -> String {
    Region::DEFAULT.to_owned()
}

fn default_domain() -> String {
    Domain::AWS.to_owned()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_log_level() -> String {
    String::from("info")
}

impl Default for S3ClientConfig {
    fn default() -> Self {
        Self {
            access_key_id: String::new(),
            secret_access_key: String::new(),
            region: default_region(),
            domain: default_domain(),
            canonicalization: Canonicalization::default(),
            default_headers: Vec::new(),
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl fmt::Debug for S3ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3ClientConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .field("domain", &self.domain)
            .field("canonicalization", &self.canonicalization)
            .field("default_headers", &self.default_headers)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl S3ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `S3_ACCESS_KEY` / `AWS_ACCESS_KEY_ID` | empty |
    /// | `S3_SECRET_KEY` / `AWS_SECRET_ACCESS_KEY` | empty |
    /// | `S3_REGION` / `AWS_REGION` | `us-east-1` |
    /// | `S3_DOMAIN` | `amazonaws.com` |
    /// | `S3_CANONICALIZATION` | `legacy` |
    /// | `S3_DEFAULT_HEADERS` | none |
    /// | `S3_TIMEOUT_SECS` | `60` |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// The `S3_*` name wins when both are set.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3sign_core::S3ClientConfig;
    ///
    /// let config = S3ClientConfig::from_env();
    /// assert!(!config.region.is_empty());
    /// ```
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let first = |names: &[&str]| names.iter().find_map(|name| lookup(name));

        if let Some(v) = first(&["S3_ACCESS_KEY", "AWS_ACCESS_KEY_ID"]) {
            config.access_key_id = v;
        }
        if let Some(v) = first(&["S3_SECRET_KEY", "AWS_SECRET_ACCESS_KEY"]) {
            config.secret_access_key = v;
        }
        if let Some(v) = first(&["S3_REGION", "AWS_REGION"]) {
            config.region = v;
        }
        if let Some(v) = lookup("S3_DOMAIN") {
            config.domain = v;
        }
        if let Some(v) = lookup("S3_CANONICALIZATION") {
            match v.parse() {
                Ok(mode) => config.canonicalization = mode,
                Err(e) => warn!(error = %e, "Ignoring S3_CANONICALIZATION"),
            }
        }
        if let Some(v) = lookup("S3_DEFAULT_HEADERS") {
            config.default_headers = parse_headers(&v);
        }
        if let Some(v) = lookup("S3_TIMEOUT_SECS") {
            match v.parse::<u64>() {
                Ok(n) => config.timeout_secs = n,
                Err(e) => warn!(error = %e, value = %v, "Ignoring S3_TIMEOUT_SECS"),
            }
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Validated signing credentials.
    ///
    /// # Errors
    /// Returns [`CoreError::Auth`] when the access key or secret key is empty
    /// or malformed.
    pub fn credentials(&self) -> CoreResult<Credentials> {
        Ok(Credentials::new(
            self.access_key_id.as_str(),
            self.secret_access_key.as_str(),
        )?)
    }

    /// Validated region.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidRegion`] when the region is malformed.
    pub fn region(&self) -> CoreResult<Region> {
        Region::new(self.region.as_str())
    }

    /// Validated domain suffix.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDomain`] when the domain is malformed.
    pub fn domain(&self) -> CoreResult<Domain> {
        Domain::new(self.domain.as_str())
    }

    /// Check every field a client needs, without building one.
    ///
    /// # Errors
    /// Returns the first invalid field as a [`CoreError`].
    pub fn validate(&self) -> CoreResult<()> {
        self.credentials()?;
        self.region()?;
        self.domain()?;
        if self.timeout_secs == 0 {
            return Err(CoreError::Config(
                "timeout_secs must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Parse `name:value;name:value` into header pairs.
///
/// Names are trimmed and lowercased, values are trimmed. Entries without a
/// `:` or with an empty name are skipped.
fn parse_headers(value: &str) -> Vec<(String, String)> {
    value
        .split(';')
        .filter_map(|entry| {
            let (name, value) = entry.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_ascii_lowercase(), value.trim().to_owned()))
        })
        .collect()
}
