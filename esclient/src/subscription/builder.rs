//! Fluent builder for [`PersistentSubscriptionSettings`].

use super::settings::{
    PersistentSubscriptionSettings, NO_MESSAGE_TIMEOUT, START_FROM_BEGINNING, START_FROM_CURRENT,
};
use super::strategy::{ConsumerStrategy, SystemConsumerStrategy};
use crate::error::{Error, Result};

/// Builder accumulating persistent subscription settings.
///
/// Every mutator updates one setting and returns the same builder so calls
/// can be chained. Count mutators return a [`Result`] and leave the setting
/// untouched when given a negative count. The builder stays usable after
/// [`build`](Self::build); each call snapshots the current values.
///
/// # Examples
///
/// ```
/// use esclient::PersistentSubscriptionSettings;
///
/// # fn main() -> esclient::Result<()> {
/// let mut builder = PersistentSubscriptionSettings::create();
/// builder.resolve_link_tos().with_max_retries_of(5)?.start_from_beginning();
/// let first = builder.build();
///
/// builder.start_from(42);
/// let second = builder.build();
///
/// assert_eq!(first.start_from(), 0);
/// assert_eq!(second.start_from(), 42);
/// assert_eq!(second.max_retry_count(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PersistentSubscriptionSettingsBuilder {
    settings: PersistentSubscriptionSettings,
}

impl PersistentSubscriptionSettingsBuilder {
    /// Creates a builder holding exactly the given values.
    ///
    /// Nothing is validated here; callers outside the crate start from
    /// [`PersistentSubscriptionSettings::create`].
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        resolve_link_tos: bool,
        start_from: i64,
        extra_statistics: bool,
        message_timeout_milliseconds: i32,
        buffer_size: i32,
        live_buffer_size: i32,
        max_retry_count: i32,
        read_batch_size: i32,
        check_point_after_milliseconds: i32,
        min_check_point_count: i32,
        max_check_point_count: i32,
        max_subscriber_count: i32,
        named_consumer_strategy: ConsumerStrategy,
    ) -> Self {
        Self {
            settings: PersistentSubscriptionSettings {
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
            },
        }
    }

    /// Asks the service to record timing histograms for subscribers.
    pub fn with_extra_statistics(&mut self) -> &mut Self {
        self.settings.extra_statistics = true;
        self
    }

    /// Resolves link events to the events they point at.
    pub fn resolve_link_tos(&mut self) -> &mut Self {
        self.settings.resolve_link_tos = true;
        self
    }

    /// Delivers link events as they are.
    pub fn do_not_resolve_link_tos(&mut self) -> &mut Self {
        self.settings.resolve_link_tos = false;
        self
    }

    /// Uses the round-robin consumer strategy.
    pub fn prefer_round_robin(&mut self) -> &mut Self {
        self.settings.named_consumer_strategy = SystemConsumerStrategy::RoundRobin.into();
        self
    }

    /// Uses the dispatch-to-single consumer strategy.
    pub fn prefer_dispatch_to_single(&mut self) -> &mut Self {
        self.settings.named_consumer_strategy = SystemConsumerStrategy::DispatchToSingle.into();
        self
    }

    /// Uses the pinned consumer strategy.
    pub fn prefer_pinned(&mut self) -> &mut Self {
        self.settings.named_consumer_strategy = SystemConsumerStrategy::Pinned.into();
        self
    }

    /// Uses a consumer strategy by name.
    ///
    /// The name is not checked against the built-in strategies, so strategies
    /// known only to the service can be selected.
    pub fn with_named_consumer_strategy(&mut self, name: impl Into<String>) -> &mut Self {
        self.settings.named_consumer_strategy = ConsumerStrategy::from_name(name);
        self
    }

    /// Starts from the first event of the stream.
    pub fn start_from_beginning(&mut self) -> &mut Self {
        self.settings.start_from = START_FROM_BEGINNING;
        self
    }

    /// Starts from wherever the stream is when the subscription is created.
    pub fn start_from_current(&mut self) -> &mut Self {
        self.settings.start_from = START_FROM_CURRENT;
        self
    }

    /// Starts from the given stream position.
    ///
    /// The position is not range-checked.
    pub fn start_from(&mut self, position: i64) -> &mut Self {
        self.settings.start_from = position;
        self
    }

    /// Sets the time before an unacknowledged message is retried.
    pub fn with_message_timeout_of(&mut self, milliseconds: i32) -> &mut Self {
        self.settings.message_timeout_milliseconds = milliseconds;
        self
    }

    /// Never times out unacknowledged messages.
    pub fn dont_timeout_messages(&mut self) -> &mut Self {
        self.settings.message_timeout_milliseconds = NO_MESSAGE_TIMEOUT;
        self
    }

    /// Sets the interval after which the service tries to checkpoint.
    pub fn check_point_after_milliseconds(&mut self, milliseconds: i32) -> &mut Self {
        self.settings.check_point_after_milliseconds = milliseconds;
        self
    }

    /// Sets the minimum number of messages to write a checkpoint for.
    ///
    /// Not compared against the maximum; the service rejects inverted bounds.
    pub fn minimum_check_point_count_of(&mut self, count: i32) -> &mut Self {
        self.settings.min_check_point_count = count;
        self
    }

    /// Sets the number of unacknowledged messages that forces a checkpoint.
    pub fn maximum_check_point_count_of(&mut self, count: i32) -> &mut Self {
        self.settings.max_check_point_count = count;
        self
    }

    /// Sets how many times a message is retried before it is considered bad.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `count` is negative.
    pub fn with_max_retries_of(&mut self, count: i32) -> Result<&mut Self> {
        self.settings.max_retry_count =
            non_negative("max_retry_count", "MaxRetries cannot be negative", count)?;
        Ok(self)
    }

    /// Sets the size of the in-memory live buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `count` is negative.
    pub fn with_live_buffer_size_of(&mut self, count: i32) -> Result<&mut Self> {
        self.settings.live_buffer_size =
            non_negative("live_buffer_size", "LiveBufferSize cannot be negative", count)?;
        Ok(self)
    }

    /// Sets the read batch size used in paging mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `count` is negative.
    pub fn with_read_batch_of(&mut self, count: i32) -> Result<&mut Self> {
        self.settings.read_batch_size =
            non_negative("read_batch_size", "ReadBatchSize cannot be negative", count)?;
        Ok(self)
    }

    /// Sets the number of messages buffered in paging mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `count` is negative.
    pub fn with_buffer_size_of(&mut self, count: i32) -> Result<&mut Self> {
        self.settings.buffer_size =
            non_negative("buffer_size", "BufferSize cannot be negative", count)?;
        Ok(self)
    }

    /// Sets the maximum number of subscribers; `0` means unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `count` is negative.
    pub fn with_max_subscriber_count_of(&mut self, count: i32) -> Result<&mut Self> {
        self.settings.max_subscriber_count = non_negative(
            "max_subscriber_count",
            "Max subscriber count cannot be negative",
            count,
        )?;
        Ok(self)
    }

    /// Snapshots the current values into a new settings value.
    #[must_use]
    pub fn build(&self) -> PersistentSubscriptionSettings {
        log::trace!("building persistent subscription settings: {:?}", self.settings);
        self.settings.clone()
    }
}

fn non_negative(field: &str, message: &str, count: i32) -> Result<i32> {
    if count < 0 {
        log::debug!("rejected {field} = {count}: {message}");
        return Err(Error::invalid_argument(field, message));
    }
    Ok(count)
}
