// s3buckets: List the AWS S3 buckets visible to a named profile.
#![forbid(unsafe_code)]
use anyhow::{
    Context,
    Result,
};
use std::io::{
    self,
    Write,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod common;
use common::{
    BucketLister,
    Buckets,
    ClientConfig,
};

mod s3;

// Log level used when RUST_LOG isn't set.
const DEFAULT_LOG_LEVEL: &str = "warn";

// Logs go to stderr, stdout carries only the bucket listing.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// Write the header and one indented line per bucket, in the given order.
fn write_buckets<W: Write>(out: &mut W, buckets: &Buckets) -> io::Result<()> {
    writeln!(out, "Buckets:")?;

    for bucket in buckets {
        writeln!(out, "  {}", bucket.name)?;
    }

    Ok(())
}

// List buckets with the given lister and write them to `out`.
// Nothing is written if listing fails.
async fn list_buckets<L, W>(lister: &L, out: &mut W) -> Result<()>
where
    L: BucketLister + Sync,
    W: Write,
{
    let buckets = lister.buckets()
        .await
        .context("Failed to list buckets")?;

    write_buckets(out, &buckets)
        .context("Failed to write bucket list")?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let matches = cli::parse_args();
    let config  = ClientConfig::try_from(&matches)?;

    debug!("Client config: {:?}", config);

    let client = s3::Client::new(config).await;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    list_buckets(&client, &mut out).await
}
