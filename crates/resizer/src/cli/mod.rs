//! Command implementations and the helpers they share.

pub mod config;
pub mod invoke;
pub mod serve;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use aws_config::BehaviorVersion;
use clap::Args;
use resizer_core::{Config, ObjectStore, S3Store};

/// Where to read the resizer configuration from.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSource {
    /// TOML config file (defaults to the NEW_SIZE, NEW_IMAGE_* and AWS_REGION env vars)
    #[arg(short, long, env = "RESIZER_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConfigSource {
    /// Load and validate the configuration.
    pub fn load(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display())),
            None => Config::from_env().context("Failed to load config from environment"),
        }
    }
}

/// Build an S3-backed store from the default AWS credential chain.
pub async fn s3_store() -> Arc<dyn ObjectStore> {
    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    Arc::new(S3Store::new(aws_sdk_s3::Client::new(&shared_config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resizer.toml");
        std::fs::write(
            &path,
            "region = \"eu-west-1\"\nsize = \"50x50\"\ndescription = \"awesome image\"\nextension = \".jpeg\"\n",
        )
        .unwrap();

        let source = ConfigSource { config: Some(path) };
        let config = source.load().unwrap();
        assert_eq!(config.size.as_str(), "50x50");
    }

    #[test]
    fn test_config_source_reports_path() {
        let source = ConfigSource {
            config: Some(PathBuf::from("/nonexistent/resizer.toml")),
        };
        let err = source.load().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/resizer.toml"));
    }
}
