//! Persistent subscription settings.
//!
//! Subscription settings are described through a
//! [`PersistentSubscriptionSettingsBuilder`], obtained from
//! [`PersistentSubscriptionSettings::create`] with the service defaults
//! already applied. Each mutator changes exactly one setting and hands the
//! same builder back, and [`PersistentSubscriptionSettingsBuilder::build`]
//! takes an independent snapshot whenever it is called.
//!
//! Only the five count settings (retries, live buffer, read batch, buffer and
//! subscriber count) are range-checked. Every other value is passed through
//! untouched and left for the service to judge.
//!
//! # Examples
//!
//! ```
//! use esclient::{PersistentSubscriptionSettings, SystemConsumerStrategy};
//!
//! # fn main() -> esclient::Result<()> {
//! let mut builder = PersistentSubscriptionSettings::create();
//! builder
//!     .start_from_current()
//!     .prefer_dispatch_to_single()
//!     .with_buffer_size_of(1000)?
//!     .with_max_subscriber_count_of(4)?;
//!
//! let settings = builder.build();
//! assert_eq!(settings.start_from(), -1);
//! assert_eq!(
//!     settings.named_consumer_strategy().system(),
//!     Some(SystemConsumerStrategy::DispatchToSingle)
//! );
//!
//! assert!(builder.with_buffer_size_of(-1).is_err());
//! assert_eq!(builder.build().buffer_size(), 1000);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod settings;
pub mod strategy;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::PersistentSubscriptionSettingsBuilder;
pub use settings::PersistentSubscriptionSettings;
pub use strategy::{ConsumerStrategy, SystemConsumerStrategy};
