// Implement the BucketLister trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::{
    BucketLister,
    Buckets,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl BucketLister for Client {
    /// Return `Buckets` discovered in S3.
    ///
    /// No filtering or sorting happens here, the list is exactly what
    /// `ListBuckets` returned.
    async fn buckets(&self) -> Result<Buckets> {
        debug!("buckets: Listing...");

        let buckets = self.list_buckets().await?;

        debug!("buckets: Found {} buckets", buckets.len());

        Ok(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::tests::{
        mock_client,
        ResponseType,
    };
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_buckets() {
        let (client, _) = mock_client(vec![
            ResponseType::FromFile("s3-list-buckets.xml"),
        ]);

        let buckets: Vec<String> = client.buckets()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();

        let expected = vec![
            "zulu-bucket",
            "alpha-bucket",
            "mike-bucket",
        ];

        assert_eq!(buckets, expected);
    }

    #[tokio::test]
    async fn test_buckets_access_denied() {
        let (client, _) = mock_client(vec![
            ResponseType::WithStatus(403, "s3-access-denied.xml"),
        ]);

        let ret = client.buckets().await;

        assert!(ret.is_err());
    }
}
