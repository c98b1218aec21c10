//! Environment variable handling for configuration overrides.
//!
//! Only connection settings can be overridden from the environment.

use crate::config::schema::Config;
use crate::endpoint::EndPoint;
use crate::error::{Error, Result};
use std::env;

/// Endpoint of the HTTP interface as `host:port`.
pub const ENV_ENDPOINT: &str = "ESCLIENT_ENDPOINT";
/// Host of the HTTP interface.
pub const ENV_HOST: &str = "ESCLIENT_HOST";
/// Port of the HTTP interface.
pub const ENV_PORT: &str = "ESCLIENT_PORT";
/// Whether to connect over TLS.
pub const ENV_USE_SSL: &str = "ESCLIENT_USE_SSL";
/// Whether operations must be routed to the leader node.
pub const ENV_REQUIRE_MASTER: &str = "ESCLIENT_REQUIRE_MASTER";
/// Username of the default credentials.
pub const ENV_USERNAME: &str = "ESCLIENT_USERNAME";
/// Password of the default credentials.
pub const ENV_PASSWORD: &str = "ESCLIENT_PASSWORD";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use esclient::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value (malformed
    /// endpoint, non-numeric port, unrecognized boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        let mut connection = config.connection.clone().unwrap_or_default();
        let mut applied = Vec::new();

        // ESCLIENT_HOST and ESCLIENT_PORT refine ESCLIENT_ENDPOINT
        if let Ok(value) = env::var(ENV_ENDPOINT) {
            let end_point: EndPoint = value.trim().parse()?;
            connection.host = Some(end_point.host().to_string());
            connection.port = Some(end_point.port());
            applied.push(ENV_ENDPOINT);
        }

        if let Ok(host) = env::var(ENV_HOST) {
            connection.host = Some(host);
            applied.push(ENV_HOST);
        }

        if let Ok(port) = env::var(ENV_PORT) {
            connection.port = Some(port.trim().parse().map_err(|_| Error::Validation {
                field: ENV_PORT.into(),
                message: format!("Invalid port number: '{port}'"),
            })?);
            applied.push(ENV_PORT);
        }

        if let Ok(val) = env::var(ENV_USE_SSL) {
            connection.use_ssl = Some(Self::parse_bool(ENV_USE_SSL, &val)?);
            applied.push(ENV_USE_SSL);
        }

        if let Ok(val) = env::var(ENV_REQUIRE_MASTER) {
            connection.require_master = Some(Self::parse_bool(ENV_REQUIRE_MASTER, &val)?);
            applied.push(ENV_REQUIRE_MASTER);
        }

        if let Ok(username) = env::var(ENV_USERNAME) {
            connection.username = Some(username);
            applied.push(ENV_USERNAME);
        }

        if let Ok(password) = env::var(ENV_PASSWORD) {
            connection.password = Some(password);
            applied.push(ENV_PASSWORD);
        }

        if !applied.is_empty() {
            log::debug!("applied environment overrides: {}", applied.join(", "));
            config.connection = Some(connection);
        }

        Ok(())
    }

    /// Parse boolean from string (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
