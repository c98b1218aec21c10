//! Assembles the effective configuration from all sources.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Builder for the effective configuration.
///
/// Sources are merged from lowest to highest precedence: configuration
/// files in the order they were added, then `ESCLIENT_*` environment
/// variables, then programmatic overrides.
///
/// # Examples
///
/// ```
/// use esclient::config::{Config, ConfigBuilder, ConnectionConfig};
///
/// let config = ConfigBuilder::new()
///     .skip_env()
///     .with_config(Config {
///         connection: Some(ConnectionConfig {
///             host: Some("es.internal".to_string()),
///             ..Default::default()
///         }),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// let settings = config.connection_settings().unwrap();
/// assert_eq!(settings.end_point().host(), "es.internal");
/// assert_eq!(settings.end_point().port(), 2113);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    files: Vec<PathBuf>,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder with no sources except the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a YAML configuration file. Later files take precedence.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Ignores `ESCLIENT_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Loads, merges and validates all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        for path in &self.files {
            let file_config = ConfigLoader::load_file(path)?;
            ConfigMerger::merge_into(&mut config, &file_config);
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::SubscriptionConfig;
    use std::fs;

    #[test]
    fn test_build_without_sources() {
        let config = ConfigBuilder::new().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_later_files_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("base.yaml");
        let second = dir.path().join("local.yaml");
        fs::write(&first, "subscription:\n  buffer_size: 10\n  read_batch_size: 5\n").unwrap();
        fs::write(&second, "subscription:\n  buffer_size: 20\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_env()
            .with_file(&first)
            .with_file(&second)
            .build()
            .unwrap();

        let subscription = config.subscription.unwrap();
        assert_eq!(subscription.buffer_size, Some(20));
        assert_eq!(subscription.read_batch_size, Some(5));
    }

    #[test]
    fn test_overrides_beat_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("esclient.yaml");
        fs::write(&path, "subscription:\n  max_retry_count: 1\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_env()
            .with_file(&path)
            .with_config(Config {
                subscription: Some(SubscriptionConfig {
                    max_retry_count: Some(9),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.subscription.unwrap().max_retry_count, Some(9));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigBuilder::new()
            .skip_env()
            .with_file(dir.path().join("nope.yaml"))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_incomplete_credentials_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("esclient.yaml");
        fs::write(&path, "connection:\n  username: admin\n").unwrap();

        let result = ConfigBuilder::new().skip_env().with_file(&path).build();
        assert!(matches!(result, Err(crate::Error::Validation { .. })));
    }
}
