//! s3sign - command-line client for S3-compatible object storage.
//!
//! Every request is signed locally with AWS Signature Version 4; no AWS SDK is
//! involved. Works with AWS S3, DigitalOcean Spaces, Scaleway and other
//! S3-compatible providers.
//!
//! # Usage
//!
//! ```text
//! S3_ACCESS_KEY=... S3_SECRET_KEY=... s3sign --region fr-par --domain scw.cloud \
//!     presign my-bucket photos/cat.jpg --expires 3600
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `S3_ACCESS_KEY` / `AWS_ACCESS_KEY_ID` | *(unset)* | Access key id |
//! | `S3_SECRET_KEY` / `AWS_SECRET_ACCESS_KEY` | *(unset)* | Secret key |
//! | `S3_REGION` / `AWS_REGION` | `us-east-1` | Region |
//! | `S3_DOMAIN` | `amazonaws.com` | Provider domain |
//! | `S3_CANONICALIZATION` | `legacy` | `legacy` or `strict` |
//! | `S3_DEFAULT_HEADERS` | *(unset)* | `name:value;name:value` sent with every request |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod cli;

use std::io::Write;

use anyhow::{Context, Result};
use bytes::Bytes;
use clap::Parser;
use s3sign_auth::Canonicalization;
use s3sign_client::{
    CreateBucket, CreateFolder, DeleteObject, GetObject, GlacierObject, HeadObject, ListBucket,
    PutObject, RestoreObject, S3Client,
};
use s3sign_core::S3ClientConfig;
use s3sign_xml::{RestoreRequest, RestoreTier};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, EndpointArgs};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `log_level` is used.
/// Logs go to stderr so stdout stays clean for URLs and object bodies.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Apply command-line overrides on top of the environment configuration.
fn apply_overrides(mut config: S3ClientConfig, args: &EndpointArgs) -> S3ClientConfig {
    if let Some(region) = &args.region {
        config.region.clone_from(region);
    }
    if let Some(domain) = &args.domain {
        config.domain.clone_from(domain);
    }
    if args.strict {
        config.canonicalization = Canonicalization::Strict;
    }
    config
}

/// Print the status line and headers to stderr, the body to `out`.
fn report(response: &http::Response<Bytes>, out: &mut impl Write) -> Result<()> {
    eprintln!("{:?} {}", response.version(), response.status());
    for (name, value) in response.headers() {
        eprintln!("{name}: {}", value.to_str().unwrap_or("<binary>"));
    }
    out.write_all(response.body())
        .context("failed to write response body")?;
    out.flush().context("failed to flush output")?;
    if !response.status().is_success() {
        warn!(status = %response.status(), "Request was rejected by the server");
    }
    Ok(())
}

async fn run(client: &S3Client, command: Command) -> Result<()> {
    let response = match command {
        Command::Presign {
            bucket,
            key,
            expires,
        } => {
            let presigned = client.presigned_url(&bucket, &key, expires)?;
            debug!(expires_at = %presigned.expires_at, "Presigned URL");
            writeln!(std::io::stdout().lock(), "{presigned}")?;
            return Ok(());
        }
        Command::Get {
            bucket,
            key,
            output,
        } => {
            let response = client.send(&GetObject::new(bucket, key)?).await?;
            if let Some(path) = output {
                if response.status().is_success() {
                    tokio::fs::write(&path, response.body())
                        .await
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!(
                        "{} bytes written to {}",
                        response.body().len(),
                        path.display()
                    );
                    return Ok(());
                }
            }
            response
        }
        Command::List { bucket, prefix } => {
            let mut op = ListBucket::new(bucket)?;
            if let Some(prefix) = prefix {
                op = op.with_prefix(prefix);
            }
            client.send(&op).await?
        }
        Command::Put { bucket, key, file } => {
            let body = tokio::fs::read(&file)
                .await
                .with_context(|| format!("failed to read {}", file.display()))?;
            client.send(&PutObject::new(bucket, key, body)?).await?
        }
        Command::Delete { bucket, key } => client.send(&DeleteObject::new(bucket, key)?).await?,
        Command::Head { bucket, key } => client.send(&HeadObject::new(bucket, key)?).await?,
        Command::Mkdir { bucket, path } => client.send(&CreateFolder::new(bucket, path)?).await?,
        Command::Mb { bucket, location } => {
            let op = match location {
                Some(location) => CreateBucket::in_location(bucket, location)?,
                None => CreateBucket::new(bucket)?,
            };
            client.send(&op).await?
        }
        Command::Restore {
            bucket,
            key,
            days,
            tier,
        } => {
            let mut request = match days {
                Some(days) => RestoreRequest::new(days)?,
                None => RestoreRequest::default(),
            };
            if let Some(tier) = tier {
                request = request.with_tier(tier.parse::<RestoreTier>()?);
            }
            client
                .send(&RestoreObject::with_request(bucket, key, request)?)
                .await?
        }
        Command::Glacier { bucket, key } => client.send(&GlacierObject::new(bucket, key)?).await?,
    };

    report(&response, &mut std::io::stdout().lock())?;
    if !response.status().is_success() {
        anyhow::bail!("server responded with {}", response.status());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = apply_overrides(S3ClientConfig::from_env(), &cli.endpoint);

    init_tracing(&config.log_level)?;

    debug!(
        region = %config.region,
        domain = %config.domain,
        canonicalization = %config.canonicalization,
        "Loaded configuration"
    );

    let client = S3Client::new(&config)
        .context("invalid client configuration")?;
    run(&client, cli.command).await
}
