//! Immutable persistent subscription settings.

use serde::Serialize;

use super::builder::PersistentSubscriptionSettingsBuilder;
use super::strategy::{ConsumerStrategy, SystemConsumerStrategy};

/// Start position meaning "wherever the stream is when the subscription is created".
pub const START_FROM_CURRENT: i64 = -1;

/// Start position of the first event in a stream.
pub const START_FROM_BEGINNING: i64 = 0;

/// Message timeout meaning "never time out".
pub const NO_MESSAGE_TIMEOUT: i32 = 0;

/// Default message timeout, in milliseconds.
pub const DEFAULT_MESSAGE_TIMEOUT_MILLISECONDS: i32 = 30_000;

/// Default number of messages buffered in paging mode.
pub const DEFAULT_BUFFER_SIZE: i32 = 500;

/// Default size of the in-memory live buffer.
pub const DEFAULT_LIVE_BUFFER_SIZE: i32 = 500;

/// Default number of delivery attempts before a message is parked.
pub const DEFAULT_MAX_RETRY_COUNT: i32 = 10;

/// Default read batch size in paging mode.
pub const DEFAULT_READ_BATCH_SIZE: i32 = 20;

/// Default checkpoint interval, in milliseconds.
pub const DEFAULT_CHECK_POINT_AFTER_MILLISECONDS: i32 = 2_000;

/// Default minimum number of messages per checkpoint.
pub const DEFAULT_MIN_CHECK_POINT_COUNT: i32 = 10;

/// Default maximum number of messages between checkpoints.
pub const DEFAULT_MAX_CHECK_POINT_COUNT: i32 = 1_000;

/// Default subscriber limit; `0` means unbounded.
pub const DEFAULT_MAX_SUBSCRIBER_COUNT: i32 = 0;

/// A frozen snapshot of persistent subscription settings.
///
/// Values are produced by [`PersistentSubscriptionSettingsBuilder::build`]
/// and cannot be changed afterwards. Serializing one yields the JSON body the
/// service expects when a subscription is created or updated.
///
/// # Examples
///
/// ```
/// use esclient::PersistentSubscriptionSettings;
///
/// let settings = PersistentSubscriptionSettings::default();
/// assert!(!settings.resolve_link_tos());
/// assert_eq!(settings.start_from(), -1);
/// assert_eq!(settings.message_timeout_milliseconds(), 30_000);
/// assert_eq!(settings.named_consumer_strategy().as_str(), "RoundRobin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentSubscriptionSettings {
    #[serde(rename = "resolveLinktos")]
    pub(super) resolve_link_tos: bool,
    pub(super) start_from: i64,
    pub(super) extra_statistics: bool,
    pub(super) message_timeout_milliseconds: i32,
    pub(super) buffer_size: i32,
    pub(super) live_buffer_size: i32,
    pub(super) max_retry_count: i32,
    pub(super) read_batch_size: i32,
    pub(super) check_point_after_milliseconds: i32,
    pub(super) min_check_point_count: i32,
    pub(super) max_check_point_count: i32,
    pub(super) max_subscriber_count: i32,
    pub(super) named_consumer_strategy: ConsumerStrategy,
}

impl PersistentSubscriptionSettings {
    /// Returns a builder primed with the service defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use esclient::PersistentSubscriptionSettings;
    ///
    /// let settings = PersistentSubscriptionSettings::create()
    ///     .with_extra_statistics()
    ///     .build();
    /// assert!(settings.extra_statistics());
    /// assert_eq!(settings.buffer_size(), 500);
    /// ```
    #[must_use]
    pub fn create() -> PersistentSubscriptionSettingsBuilder {
        PersistentSubscriptionSettingsBuilder::new(
            false,
            START_FROM_CURRENT,
            false,
            DEFAULT_MESSAGE_TIMEOUT_MILLISECONDS,
            DEFAULT_BUFFER_SIZE,
            DEFAULT_LIVE_BUFFER_SIZE,
            DEFAULT_MAX_RETRY_COUNT,
            DEFAULT_READ_BATCH_SIZE,
            DEFAULT_CHECK_POINT_AFTER_MILLISECONDS,
            DEFAULT_MIN_CHECK_POINT_COUNT,
            DEFAULT_MAX_CHECK_POINT_COUNT,
            DEFAULT_MAX_SUBSCRIBER_COUNT,
            SystemConsumerStrategy::RoundRobin.into(),
        )
    }

    /// Whether link events are resolved to the events they point at.
    #[must_use]
    pub const fn resolve_link_tos(&self) -> bool {
        self.resolve_link_tos
    }

    /// Stream position to start from; `-1` means the current end of the stream.
    #[must_use]
    pub const fn start_from(&self) -> i64 {
        self.start_from
    }

    /// Whether the service records timing histograms for subscribers.
    #[must_use]
    pub const fn extra_statistics(&self) -> bool {
        self.extra_statistics
    }

    /// Time before an unacknowledged message is retried; `0` disables the timeout.
    #[must_use]
    pub const fn message_timeout_milliseconds(&self) -> i32 {
        self.message_timeout_milliseconds
    }

    /// Number of messages buffered when in paging mode.
    #[must_use]
    pub const fn buffer_size(&self) -> i32 {
        self.buffer_size
    }

    /// Size of the in-memory live buffer before falling back to paging.
    #[must_use]
    pub const fn live_buffer_size(&self) -> i32 {
        self.live_buffer_size
    }

    /// Delivery attempts before a message is considered bad.
    #[must_use]
    pub const fn max_retry_count(&self) -> i32 {
        self.max_retry_count
    }

    /// Read batch size when in paging mode.
    #[must_use]
    pub const fn read_batch_size(&self) -> i32 {
        self.read_batch_size
    }

    /// Interval after which the service tries to checkpoint.
    #[must_use]
    pub const fn check_point_after_milliseconds(&self) -> i32 {
        self.check_point_after_milliseconds
    }

    /// Minimum number of messages to write a checkpoint for.
    #[must_use]
    pub const fn min_check_point_count(&self) -> i32 {
        self.min_check_point_count
    }

    /// Maximum number of messages not checkpointed before forcing a checkpoint.
    #[must_use]
    pub const fn max_check_point_count(&self) -> i32 {
        self.max_check_point_count
    }

    /// Maximum number of subscribers; `0` means unbounded.
    #[must_use]
    pub const fn max_subscriber_count(&self) -> i32 {
        self.max_subscriber_count
    }

    /// How events are distributed among subscribers.
    #[must_use]
    pub fn named_consumer_strategy(&self) -> &ConsumerStrategy {
        &self.named_consumer_strategy
    }
}

impl Default for PersistentSubscriptionSettings {
    fn default() -> Self {
        Self::create().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = PersistentSubscriptionSettings::default();
        assert!(!settings.resolve_link_tos());
        assert_eq!(settings.start_from(), START_FROM_CURRENT);
        assert!(!settings.extra_statistics());
        assert_eq!(settings.message_timeout_milliseconds(), 30_000);
        assert_eq!(settings.buffer_size(), 500);
        assert_eq!(settings.live_buffer_size(), 500);
        assert_eq!(settings.max_retry_count(), 10);
        assert_eq!(settings.read_batch_size(), 20);
        assert_eq!(settings.check_point_after_milliseconds(), 2_000);
        assert_eq!(settings.min_check_point_count(), 10);
        assert_eq!(settings.max_check_point_count(), 1_000);
        assert_eq!(settings.max_subscriber_count(), 0);
        assert_eq!(
            settings.named_consumer_strategy(),
            &ConsumerStrategy::System(SystemConsumerStrategy::RoundRobin)
        );
    }

    #[test]
    fn test_serializes_with_service_field_names() {
        let value = serde_json::to_value(PersistentSubscriptionSettings::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 13);
        assert_eq!(object["resolveLinktos"], false);
        assert_eq!(object["startFrom"], -1);
        assert_eq!(object["extraStatistics"], false);
        assert_eq!(object["messageTimeoutMilliseconds"], 30_000);
        assert_eq!(object["bufferSize"], 500);
        assert_eq!(object["liveBufferSize"], 500);
        assert_eq!(object["maxRetryCount"], 10);
        assert_eq!(object["readBatchSize"], 20);
        assert_eq!(object["checkPointAfterMilliseconds"], 2_000);
        assert_eq!(object["minCheckPointCount"], 10);
        assert_eq!(object["maxCheckPointCount"], 1_000);
        assert_eq!(object["maxSubscriberCount"], 0);
        assert_eq!(object["namedConsumerStrategy"], "RoundRobin");
    }

    #[test]
    fn test_custom_strategy_serializes_verbatim() {
        let settings = PersistentSubscriptionSettings::create()
            .with_named_consumer_strategy("Custom")
            .build();
        let value = serde_json::to_value(settings).unwrap();
        assert_eq!(value["namedConsumerStrategy"], "Custom");
    }
}
