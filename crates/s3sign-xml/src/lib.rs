//! XML request bodies for the s3sign client.
//!
//! Only two operations send XML: bucket creation and archive restore. This
//! crate serializes their bodies with `quick-xml`.
//!
//! # S3 XML conventions
//!
//! - Namespace: `http://s3.amazonaws.com/doc/2006-03-01/`
//! - No XML declaration; the root element is the first byte of the body

pub mod documents;
pub mod error;
pub mod serialize;

pub use documents::{CreateBucketConfiguration, RestoreRequest, RestoreTier};
pub use error::XmlError;
pub use serialize::{S3_NAMESPACE, S3Serialize, to_xml};
