#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # esclient
//!
//! Settings for talking to an event store over its HTTP API.
//!
//! This library provides the immutable settings values a transport layer
//! needs to reach the store, and the builder used to describe persistent
//! (competing-consumer) subscriptions.
//!
//! ## Core Types
//!
//! - [`ConnectionSettings`]: endpoint, TLS flag, default credentials and leader routing
//! - [`EndPoint`] and [`UserCredentials`]: connection building blocks
//! - [`PersistentSubscriptionSettingsBuilder`] and [`PersistentSubscriptionSettings`]:
//!   fluent construction of subscription settings
//! - [`SystemConsumerStrategy`] and [`ConsumerStrategy`]: named consumer strategies
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use esclient::{ConnectionSettings, PersistentSubscriptionSettings};
//!
//! let connection = ConnectionSettings::default();
//! assert_eq!(connection.end_point().to_string(), "localhost:2113");
//!
//! let settings = PersistentSubscriptionSettings::create()
//!     .resolve_link_tos()
//!     .with_max_retries_of(5)
//!     .unwrap()
//!     .start_from_beginning()
//!     .build();
//! assert!(settings.resolve_link_tos());
//! assert_eq!(settings.max_retry_count(), 5);
//! assert_eq!(settings.start_from(), 0);
//! ```

pub mod config;
pub mod connection;
pub mod credentials;
pub mod endpoint;
pub mod error;
pub mod subscription;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use connection::ConnectionSettings;
pub use credentials::UserCredentials;
pub use endpoint::EndPoint;
pub use error::{Error, Result};
pub use subscription::{
    ConsumerStrategy, PersistentSubscriptionSettings, PersistentSubscriptionSettingsBuilder,
    SystemConsumerStrategy,
};
