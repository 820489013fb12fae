// Handles region things
use aws_config::environment::region::EnvironmentVariableRegionProvider;
use aws_config::meta::region::RegionProviderChain;
use aws_config::profile::profile_file::ProfileFiles;
use aws_config::profile::ProfileFileRegionProvider;
use aws_types::region::Region;
use tracing::debug;

/// Region used when neither the environment nor the profile provide one.
///
/// `ListBuckets` is a global operation, so any region sees every bucket, but
/// the SDK still needs one to sign the request.
pub const FALLBACK_REGION: &str = "us-east-1";

/// Returns the region provider for the given `profile`.
///
/// Resolution order is `AWS_REGION` from the environment, then the `region`
/// key of the profile, then `FALLBACK_REGION`. `profile_files` replaces the
/// default shared config files when given.
pub fn region_provider(
    profile: &str,
    profile_files: Option<&ProfileFiles>,
) -> RegionProviderChain {
    debug!("region_provider: Resolving region for profile '{}'", profile);

    RegionProviderChain::first_try(EnvironmentVariableRegionProvider::new())
        .or_else(profile_region_provider(profile, profile_files))
}

// The profile's region, falling back to FALLBACK_REGION.
fn profile_region_provider(
    profile: &str,
    profile_files: Option<&ProfileFiles>,
) -> RegionProviderChain {
    let builder = ProfileFileRegionProvider::builder()
        .profile_name(profile);

    let profile_region = match profile_files {
        Some(files) => builder.profile_files(files.clone()).build(),
        None        => builder.build(),
    };

    RegionProviderChain::first_try(profile_region)
        .or_else(Region::new(FALLBACK_REGION))
}
