//! Signed requests and presigned URLs for S3-compatible object storage.
//!
//! This crate ties the signer to a small, strongly-typed operation surface.
//! Each operation is a descriptor validated at construction; [`S3Client`]
//! signs it with AWS Signature Version 4 and either returns the
//! [`SignedRequest`] or sends it through a [`Transport`].
//!
//! # Providers
//!
//! Hosts are virtual-hosted: `{bucket}.s3.{region}.{domain}` for AWS,
//! Scaleway and most S3-compatible services, and `{bucket}.{region}.{domain}`
//! for DigitalOcean Spaces.
//!
//! # Modules
//!
//! - [`client`] - The signing client and signed request type
//! - [`error`] - Client error types
//! - [`operations`] - Operation descriptors
//! - [`transport`] - Transport trait and `reqwest` implementation

pub mod client;
pub mod error;
pub mod operations;
pub mod transport;

pub use client::{S3Client, SignedRequest};
pub use error::{ClientError, ClientResult};
pub use operations::{
    CreateBucket, CreateFolder, DeleteObject, GetObject, GlacierObject, HeadObject, ListBucket,
    ObjectLocation, PutObject, RestoreObject, S3Operation,
};
pub use transport::{ReqwestTransport, Transport};
