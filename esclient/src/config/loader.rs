//! Configuration file loading.

use crate::config::schema::Config;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Loads configuration from YAML.
///
/// # Examples
///
/// ```
/// use esclient::config::ConfigLoader;
///
/// let config = ConfigLoader::load_str("connection:\n  port: 2114\n").unwrap();
/// assert_eq!(config.connection.unwrap().port, Some(2114));
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read and
    /// [`Error::Configuration`](crate::Error::Configuration) if it is not a
    /// valid configuration.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::load_str(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// YAML is malformed or contains unknown fields.
    pub fn load_str(contents: &str) -> Result<Config> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
