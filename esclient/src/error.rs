//! Error types for the esclient library.
//!
//! The settings core has a single failure mode, [`Error::InvalidArgument`].
//! The remaining variants belong to the configuration layer that reads
//! settings from files and the environment.

use thiserror::Error;

/// Result type alias for operations that may fail with an esclient error.
///
/// # Examples
///
/// ```
/// use esclient::{Error, Result};
///
/// fn example_operation() -> Result<i32> {
///     Ok(10)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the esclient library.
#[derive(Debug, Error)]
pub enum Error {
    /// A builder argument was rejected.
    #[error("{message}")]
    InvalidArgument {
        /// The setting the argument was meant for.
        field: String,
        /// A description of the violated constraint.
        message: String,
    },

    /// An endpoint string could not be parsed.
    #[error("invalid endpoint '{value}': {reason}")]
    InvalidEndPoint {
        /// The rejected input.
        value: String,
        /// The reason the endpoint is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Builds an [`Error::InvalidArgument`] for a field.
    pub(crate) fn invalid_argument(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if error is a rejected builder argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use esclient::PersistentSubscriptionSettings;
    ///
    /// let err = PersistentSubscriptionSettings::create()
    ///     .with_read_batch_of(-1)
    ///     .unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
