// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use aws_config::profile::profile_file::ProfileFiles;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_sdk_s3::client::Client as S3Client;
use crate::common::{
    region_provider,
    Bucket,
    Buckets,
    ClientConfig,
};
use tracing::debug;

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,

    /// The profile that the client was created with.
    pub profile: String,
}

impl Client {
    /// Return a new S3 `Client` with the given `ClientConfig`.
    ///
    /// Credentials are taken only from the configured profile. A missing
    /// profile isn't detected here, the SDK reports it when the first
    /// request is signed.
    pub async fn new(config: ClientConfig) -> Self {
        let profile       = config.profile;
        let profile_files = config.profile_files;

        debug!("new: Creating S3Client for profile '{}'", profile);

        let credentials = profile_credentials(
            &profile,
            profile_files.as_ref(),
        );

        let region = region_provider(&profile, profile_files.as_ref());

        let config = aws_config::from_env()
            .credentials_provider(credentials)
            .region(region)
            .load()
            .await;

        let client = S3Client::new(&config);

        Self {
            client,
            profile,
        }
    }

    /// Returns the buckets visible to our profile.
    ///
    /// This is a single `ListBuckets` call. Bucket order is preserved and
    /// buckets without a name are skipped.
    pub async fn list_buckets(&self) -> Result<Buckets> {
        debug!("list_buckets: Listing for profile '{}'", self.profile);

        let output = self.client.list_buckets()
            .send()
            .await?;

        debug!("list_buckets: API returned: {:?}", output);

        let buckets = output.buckets()
            .unwrap_or_default()
            .iter()
            .filter_map(|b| b.name())
            .map(Bucket::from)
            .collect();

        Ok(buckets)
    }
}

/// Returns a credentials provider reading only the given `profile`.
///
/// `profile_files` replaces the default shared config and credentials files
/// when given.
fn profile_credentials(
    profile: &str,
    profile_files: Option<&ProfileFiles>,
) -> ProfileFileCredentialsProvider {
    let builder = ProfileFileCredentialsProvider::builder()
        .profile_name(profile);

    match profile_files {
        Some(files) => builder.profile_files(files.clone()).build(),
        None        => builder.build(),
    }
}
