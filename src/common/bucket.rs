// Definition of a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Represents an S3 bucket.
///
/// Only the `name` is kept, the bucket itself is owned by S3.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bucket {
    /// The bucket name as returned by the provider.
    pub name: String,
}

/// Convenience type for a list of `Bucket`.
///
/// Always kept in the order that the provider returned the buckets in.
pub type Buckets = Vec<Bucket>;

impl From<&str> for Bucket {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}
