//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Sign and send requests to S3-compatible object storage.
#[derive(Debug, Parser)]
#[command(name = "s3sign", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Overrides for values normally read from the environment.
#[derive(Debug, Args)]
pub struct EndpointArgs {
    /// Region, e.g. `fr-par` (overrides `S3_REGION`)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Provider domain, e.g. `scw.cloud` (overrides `S3_DOMAIN`)
    #[arg(long, global = true)]
    pub domain: Option<String>,

    /// Sort query parameters and sign `/` for the bucket root
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a presigned GET URL
    Presign {
        bucket: String,
        key: String,
        /// Lifetime in seconds (default 86400, max 604800)
        #[arg(long)]
        expires: Option<u64>,
    },
    /// Download an object
    Get {
        bucket: String,
        key: String,
        /// Write the body here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List a bucket
    List {
        bucket: String,
        /// Only list keys under this prefix
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Upload a file as a public-read object
    Put {
        bucket: String,
        key: String,
        /// File to upload
        file: PathBuf,
    },
    /// Delete an object
    Delete { bucket: String, key: String },
    /// Show an object's metadata
    Head { bucket: String, key: String },
    /// Create a folder marker
    Mkdir { bucket: String, path: String },
    /// Create a bucket
    Mb {
        bucket: String,
        /// Location constraint (default fr-par)
        #[arg(long)]
        location: Option<String>,
    },
    /// Restore an archived object
    Restore {
        bucket: String,
        key: String,
        /// Days to keep the restored copy (default 250)
        #[arg(long)]
        days: Option<u32>,
        /// Retrieval tier: expedited, standard or bulk
        #[arg(long)]
        tier: Option<String>,
    },
    /// Move an object to the GLACIER storage class
    Glacier { bucket: String, key: String },
}
