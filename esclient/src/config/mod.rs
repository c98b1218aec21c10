//! Configuration system for esclient.
//!
//! This module reads connection and subscription settings from:
//! - YAML configuration files
//! - `ESCLIENT_*` environment variables (connection settings only)
//! - Programmatic overrides via [`ConfigBuilder::with_config`]
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides
//! 2. Environment variables
//! 3. Configuration files, later files first
//! 4. Built-in defaults ([`ConnectionSettings::default`](crate::ConnectionSettings::default)
//!    and [`PersistentSubscriptionSettings::create`](crate::PersistentSubscriptionSettings::create))
//!
//! Configuration is only ever read; nothing here writes it back.
//!
//! # Examples
//!
//! ```no_run
//! use esclient::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_file("esclient.yaml")
//!     .build()
//!     .unwrap();
//!
//! let connection = config.connection_settings().unwrap();
//! let subscription = config.subscription_builder().unwrap().build();
//! println!("{} {:?}", connection.base_uri(), subscription);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use schema::{Config, ConnectionConfig, SubscriptionConfig};
pub use validator::ConfigValidator;
