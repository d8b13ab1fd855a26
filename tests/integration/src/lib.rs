//! Live integration tests for s3sign.
//!
//! These tests talk to a real S3-compatible provider configured through the
//! usual `S3_*` environment variables, plus `S3_TEST_BUCKET` naming an
//! existing bucket the credentials can write to. They are marked `#[ignore]`
//! so they don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! S3_ACCESS_KEY=... S3_SECRET_KEY=... S3_REGION=fr-par S3_DOMAIN=scw.cloud \
//! S3_TEST_BUCKET=my-bucket cargo test -p s3sign-integration -- --ignored
//! ```

use std::sync::Once;

use s3sign_client::S3Client;
use s3sign_core::S3ClientConfig;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a client from the environment.
#[must_use]
pub fn s3_client() -> S3Client {
    init_tracing();
    let config = S3ClientConfig::from_env();
    S3Client::new(&config)
        .unwrap_or_else(|e| panic!("invalid test configuration: {e}"))
}

/// Bucket the tests write into.
#[must_use]
pub fn test_bucket() -> String {
    std::env::var("S3_TEST_BUCKET")
        .unwrap_or_else(|_| panic!("S3_TEST_BUCKET is not set"))
}

/// Generate a unique object key for a test.
#[must_use]
pub fn test_key(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("s3sign-test/{prefix}-{id}.txt")
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("s3sign-{prefix}-{id}")
}

mod test_bucket;
mod test_object;
mod test_presign;
