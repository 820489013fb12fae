// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Context;
use aws_config::profile::profile_file::ProfileFiles;
use clap::ArgMatches;

/// Client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// The named credential profile that the client authenticates with.
    ///
    /// Credentials and, if present, the region are read from this profile in
    /// the AWS shared config files.
    pub profile: String,

    /// Profile files to read in place of the default `~/.aws/config` and
    /// `~/.aws/credentials`.
    ///
    /// `None` uses the SDK defaults, including `AWS_CONFIG_FILE` and
    /// `AWS_SHARED_CREDENTIALS_FILE`.
    pub profile_files: Option<ProfileFiles>,
}

impl ClientConfig {
    /// Return a new `ClientConfig` for the given `profile`, reading the
    /// default profile files.
    pub fn new(profile: &str) -> Self {
        Self {
            profile:       profile.to_owned(),
            profile_files: None,
        }
    }
}

/// Build a `ClientConfig` from parsed command line arguments.
///
/// `PROFILE` is a required argument, clap will have exited with a usage
/// error before we get here if it was missing.
impl TryFrom<&ArgMatches> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(matches: &ArgMatches) -> Result<Self, Self::Error> {
        let profile = matches
            .get_one::<String>("PROFILE")
            .context("PROFILE is required")?;

        Ok(Self::new(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_config_from_matches() {
        let matches = cli::create_app()
            .try_get_matches_from(vec!["s3buckets", "--profile", "prod"])
            .unwrap();

        let config = ClientConfig::try_from(&matches).unwrap();

        assert_eq!(config.profile, "prod");
        assert!(config.profile_files.is_none());
    }

    #[test]
    fn test_client_config_without_profile() {
        // Bypasses the required check to reach the conversion directly.
        let matches = cli::create_app()
            .mut_arg("PROFILE", |arg| arg.required(false))
            .try_get_matches_from(vec!["s3buckets"])
            .unwrap();

        let err = ClientConfig::try_from(&matches).unwrap_err();

        assert_eq!(err.to_string(), "PROFILE is required");
    }
}
