//! Configuration management for the resizer.
//!
//! The Lambda reads its settings from environment variables; local runs may
//! use a TOML file with the same fields instead. Either way the result is
//! validated before any storage call is made.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use crate::size::SizeSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Region used to compose the reported result URL.
pub const ENV_REGION: &str = "AWS_REGION";
/// Target size, e.g. `50x50`.
pub const ENV_SIZE: &str = "NEW_SIZE";
/// Description stored as metadata on every output object.
pub const ENV_DESCRIPTION: &str = "NEW_IMAGE_DESCRIPTION";
/// Extension (with leading dot) appended to derived keys.
pub const ENV_EXTENSION: &str = "NEW_IMAGE_EXTENSION";
/// Optional interpolation filter name.
pub const ENV_FILTER: &str = "RESIZE_FILTER";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Cloud region, only used in result URLs
    pub region: String,

    /// Exact output dimensions
    pub size: SizeSpec,

    /// Free-text description attached to each output object
    pub description: String,

    /// Output key extension including the leading dot (e.g. `.jpeg`)
    pub extension: String,

    /// Resampling filter
    #[serde(default)]
    pub filter: ResizeFilter,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Every required variable is checked before anything else happens, so a
    /// missing one fails the invocation up front.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| lookup(name).ok_or(ConfigError::MissingVar(name));

        let region = require(ENV_REGION)?;
        let size = require(ENV_SIZE)?;
        let description = require(ENV_DESCRIPTION)?;
        let extension = require(ENV_EXTENSION)?;

        let filter = match lookup(ENV_FILTER) {
            Some(name) if !name.trim().is_empty() => name.trim().parse()?,
            _ => ResizeFilter::default(),
        };

        let config = Self {
            region,
            size: size.parse()?,
            description,
            extension,
            filter,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
