//! Configuration schema definitions.
//!
//! Every leaf is optional so that partial configurations from different
//! sources can be merged before settings are materialized.

use serde::{Deserialize, Serialize};

use crate::config::validator::ConfigValidator;
use crate::connection::{ConnectionSettings, DEFAULT_HOST, DEFAULT_HTTP_PORT};
use crate::credentials::UserCredentials;
use crate::endpoint::EndPoint;
use crate::error::Result;
use crate::subscription::{PersistentSubscriptionSettings, PersistentSubscriptionSettingsBuilder};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use esclient::config::{Config, ConnectionConfig};
///
/// let config = Config {
///     connection: Some(ConnectionConfig {
///         host: Some("es.internal".to_string()),
///         port: Some(2114),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// let settings = config.connection_settings().unwrap();
/// assert_eq!(settings.end_point().to_string(), "es.internal:2114");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How to reach the event store.
    pub connection: Option<ConnectionConfig>,

    /// Persistent subscription settings applied on top of the service defaults.
    pub subscription: Option<SubscriptionConfig>,
}

impl Config {
    /// Materializes connection settings.
    ///
    /// Missing values fall back to those of [`ConnectionSettings::default`].
    ///
    /// # Errors
    ///
    /// Returns a validation error if only one of username and password is set.
    pub fn connection_settings(&self) -> Result<ConnectionSettings> {
        ConfigValidator::validate(self)?;

        let Some(connection) = &self.connection else {
            return Ok(ConnectionSettings::default());
        };

        let end_point = EndPoint::new(
            connection.host.as_deref().unwrap_or(DEFAULT_HOST),
            connection.port.unwrap_or(DEFAULT_HTTP_PORT),
        );
        let credentials = match (&connection.username, &connection.password) {
            (Some(username), Some(password)) => Some(UserCredentials::new(username, password)),
            _ => None,
        };

        Ok(ConnectionSettings::new(
            end_point,
            connection.use_ssl.unwrap_or(false),
            credentials,
            connection.require_master.unwrap_or(true),
        ))
    }

    /// Returns a subscription builder with the configured values applied on
    /// top of the service defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if a
    /// configured count is negative.
    pub fn subscription_builder(&self) -> Result<PersistentSubscriptionSettingsBuilder> {
        let mut builder = PersistentSubscriptionSettings::create();
        let Some(sub) = &self.subscription else {
            return Ok(builder);
        };

        match sub.resolve_link_tos {
            Some(true) => {
                builder.resolve_link_tos();
            }
            Some(false) => {
                builder.do_not_resolve_link_tos();
            }
            None => {}
        }
        if sub.extra_statistics == Some(true) {
            builder.with_extra_statistics();
        }
        if let Some(position) = sub.start_from {
            builder.start_from(position);
        }
        if let Some(timeout) = sub.message_timeout_milliseconds {
            builder.with_message_timeout_of(timeout);
        }
        if let Some(interval) = sub.check_point_after_milliseconds {
            builder.check_point_after_milliseconds(interval);
        }
        if let Some(count) = sub.min_check_point_count {
            builder.minimum_check_point_count_of(count);
        }
        if let Some(count) = sub.max_check_point_count {
            builder.maximum_check_point_count_of(count);
        }
        if let Some(count) = sub.buffer_size {
            builder.with_buffer_size_of(count)?;
        }
        if let Some(count) = sub.live_buffer_size {
            builder.with_live_buffer_size_of(count)?;
        }
        if let Some(count) = sub.max_retry_count {
            builder.with_max_retries_of(count)?;
        }
        if let Some(count) = sub.read_batch_size {
            builder.with_read_batch_of(count)?;
        }
        if let Some(count) = sub.max_subscriber_count {
            builder.with_max_subscriber_count_of(count)?;
        }
        if let Some(name) = &sub.named_consumer_strategy {
            builder.with_named_consumer_strategy(name.as_str());
        }

        Ok(builder)
    }
}

/// Connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// Host of the HTTP interface.
    pub host: Option<String>,

    /// Port of the HTTP interface.
    pub port: Option<u16>,

    /// Whether to connect over TLS.
    pub use_ssl: Option<bool>,

    /// Whether operations must be routed to the leader node.
    pub require_master: Option<bool>,

    /// Username of the default credentials (requires `password`).
    pub username: Option<String>,

    /// Password of the default credentials (requires `username`).
    pub password: Option<String>,
}

/// Persistent subscription configuration.
///
/// Field names follow the builder mutators. Range checks happen when the
/// values are applied to a builder, not when they are parsed.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SubscriptionConfig {
    /// Resolve link events.
    pub resolve_link_tos: Option<bool>,

    /// Start position; `-1` means the current end of the stream.
    pub start_from: Option<i64>,

    /// Record timing histograms for subscribers.
    pub extra_statistics: Option<bool>,

    /// Message timeout in milliseconds; `0` disables it.
    pub message_timeout_milliseconds: Option<i32>,

    /// Number of messages buffered in paging mode.
    pub buffer_size: Option<i32>,

    /// Size of the in-memory live buffer.
    pub live_buffer_size: Option<i32>,

    /// Delivery attempts before a message is considered bad.
    pub max_retry_count: Option<i32>,

    /// Read batch size in paging mode.
    pub read_batch_size: Option<i32>,

    /// Checkpoint interval in milliseconds.
    pub check_point_after_milliseconds: Option<i32>,

    /// Minimum number of messages per checkpoint.
    pub min_check_point_count: Option<i32>,

    /// Maximum number of messages between checkpoints.
    pub max_check_point_count: Option<i32>,

    /// Maximum number of subscribers; `0` means unbounded.
    pub max_subscriber_count: Option<i32>,

    /// Consumer strategy name, passed through unchecked.
    pub named_consumer_strategy: Option<String>,
}
