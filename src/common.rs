// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket;
mod bucket_lister;
mod client_config;
mod region;

pub use bucket::*;
pub use bucket_lister::*;
pub use client_config::*;
pub use region::*;
