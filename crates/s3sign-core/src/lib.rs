//! Configuration and endpoint types for the s3sign client.
//!
//! This crate holds what every other s3sign crate agrees on: the client
//! configuration loaded from the environment, validated region and domain
//! types, and the single function that turns a bucket into a virtual host.

mod config;
mod error;
mod types;

pub use config::S3ClientConfig;
pub use error::{CoreError, CoreResult};
pub use types::{Domain, Endpoint, Region, S3_SERVICE, resolve_host, validate_bucket};
