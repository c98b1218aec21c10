//! Configuration merging and precedence handling.

use crate::config::schema::{Config, ConnectionConfig, SubscriptionConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use esclient::config::{Config, ConfigMerger, ConnectionConfig};
///
/// let low = Config {
///     connection: Some(ConnectionConfig { host: Some("low".to_string()), ..Default::default() }),
///     ..Default::default()
/// };
/// let high = Config {
///     connection: Some(ConnectionConfig { port: Some(2114), ..Default::default() }),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// let connection = result.connection.unwrap();
/// assert_eq!(connection.host, Some("low".to_string()));
/// assert_eq!(connection.port, Some(2114));
/// ```
pub struct ConfigMerger;

/// Overwrites `target` with `source` when `source` is set.
macro_rules! overwrite {
    ($target:ident, $source:ident, $($field:ident),+ $(,)?) => {
        $(
            if $source.$field.is_some() {
                $target.$field.clone_from(&$source.$field);
            }
        )+
    };
}

impl ConfigMerger {
    /// Merge multiple configurations into a final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: &[Config]) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, source);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Nested sections are merged field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(ref source_connection) = source.connection {
            let target_connection = target.connection.get_or_insert_with(Default::default);
            Self::merge_connection(target_connection, source_connection);
        }

        if let Some(ref source_subscription) = source.subscription {
            let target_subscription = target.subscription.get_or_insert_with(Default::default);
            Self::merge_subscription(target_subscription, source_subscription);
        }
    }

    fn merge_connection(target: &mut ConnectionConfig, source: &ConnectionConfig) {
        overwrite!(
            target,
            source,
            host,
            port,
            use_ssl,
            require_master,
            username,
            password,
        );
    }

    fn merge_subscription(target: &mut SubscriptionConfig, source: &SubscriptionConfig) {
        overwrite!(
            target,
            source,
            resolve_link_tos,
            start_from,
            extra_statistics,
            message_timeout_milliseconds,
            buffer_size,
            live_buffer_size,
            max_retry_count,
            read_batch_size,
            check_point_after_milliseconds,
            min_check_point_count,
            max_check_point_count,
            max_subscriber_count,
            named_consumer_strategy,
        );
    }
}
