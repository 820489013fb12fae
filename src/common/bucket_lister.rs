// BucketLister trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::Buckets;

/// `BucketLister` represents the required method to list S3 buckets.
///
/// This trait should be implemented by all `Client`s performing this task.
#[async_trait]
pub trait BucketLister {
    /// Returns the buckets visible to the client, in provider order.
    async fn buckets(&self) -> Result<Buckets>;
}
