//! Configuration validation.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values.
    ///
    /// The size spec is already checked by its parser; this covers the
    /// free-form strings.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::ValidationError("region must not be empty".into()));
        }
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(ConfigError::ValidationError(format!(
                "extension must start with '.' and name a suffix, got '{}'",
                self.extension
            )));
        }
        if self.extension.contains('/') {
            return Err(ConfigError::ValidationError(format!(
                "extension must not contain '/', got '{}'",
                self.extension
            )));
        }
        Ok(())
    }
}
