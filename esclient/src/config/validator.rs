//! Configuration validation.
//!
//! Only structural rules are checked here. Endpoint reachability is the
//! transport's concern and subscription counts are checked by the builder.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates merged configuration before settings are materialized.
///
/// # Examples
///
/// ```
/// use esclient::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a username is given without a password
    /// or the other way round.
    pub fn validate(config: &Config) -> Result<()> {
        let Some(connection) = &config.connection else {
            return Ok(());
        };

        match (&connection.username, &connection.password) {
            (Some(_), None) => Err(Error::Validation {
                field: "connection.password".into(),
                message: "a username requires a password".into(),
            }),
            (None, Some(_)) => Err(Error::Validation {
                field: "connection.username".into(),
                message: "a password requires a username".into(),
            }),
            _ => Ok(()),
        }
    }
}
