//! Named consumer strategies.
//!
//! A consumer strategy decides how the events of one persistent subscription
//! are distributed among its subscribers. The service ships a fixed set of
//! strategies, but it may understand names the client has never heard of,
//! so [`ConsumerStrategy`] keeps unknown names verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Consumer strategies built into the service.
///
/// # Examples
///
/// ```
/// use esclient::SystemConsumerStrategy;
///
/// assert_eq!(SystemConsumerStrategy::RoundRobin.as_str(), "RoundRobin");
/// assert_eq!(
///     SystemConsumerStrategy::from_name("DispatchToSingle"),
///     Some(SystemConsumerStrategy::DispatchToSingle)
/// );
/// assert_eq!(SystemConsumerStrategy::from_name("Custom"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemConsumerStrategy {
    /// Deliver to one subscriber until it is full, then the next.
    DispatchToSingle,
    /// Distribute events to subscribers in turn.
    RoundRobin,
    /// Pin events to subscribers by a hash of their stream.
    Pinned,
}

impl SystemConsumerStrategy {
    /// All built-in strategies.
    pub const ALL: [Self; 3] = [Self::DispatchToSingle, Self::RoundRobin, Self::Pinned];

    /// Returns the name the service knows this strategy by.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DispatchToSingle => "DispatchToSingle",
            Self::RoundRobin => "RoundRobin",
            Self::Pinned => "Pinned",
        }
    }

    /// Looks up a built-in strategy by its exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for SystemConsumerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The consumer strategy of a persistent subscription.
///
/// Any string is accepted; names matching a built-in strategy become
/// [`ConsumerStrategy::System`].
///
/// # Examples
///
/// ```
/// use esclient::{ConsumerStrategy, SystemConsumerStrategy};
///
/// let known = ConsumerStrategy::from_name("Pinned");
/// assert_eq!(known, ConsumerStrategy::System(SystemConsumerStrategy::Pinned));
///
/// let custom = ConsumerStrategy::from_name("Custom");
/// assert_eq!(custom.as_str(), "Custom");
/// assert!(custom.system().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConsumerStrategy {
    /// A strategy built into the service.
    System(SystemConsumerStrategy),
    /// A strategy name only the service can interpret.
    Custom(String),
}

impl ConsumerStrategy {
    /// Wraps a strategy name without validating it.
    #[must_use]
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        match SystemConsumerStrategy::from_name(&name) {
            Some(system) => Self::System(system),
            None => Self::Custom(name),
        }
    }

    /// Returns the strategy name as sent to the service.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::System(system) => system.as_str(),
            Self::Custom(name) => name,
        }
    }

    /// Returns the built-in strategy, if this is one.
    #[must_use]
    pub fn system(&self) -> Option<SystemConsumerStrategy> {
        match self {
            Self::System(system) => Some(*system),
            Self::Custom(_) => None,
        }
    }
}

impl From<SystemConsumerStrategy> for ConsumerStrategy {
    fn from(strategy: SystemConsumerStrategy) -> Self {
        Self::System(strategy)
    }
}

impl From<String> for ConsumerStrategy {
    fn from(name: String) -> Self {
        Self::from_name(name)
    }
}

impl From<ConsumerStrategy> for String {
    fn from(strategy: ConsumerStrategy) -> Self {
        match strategy {
            ConsumerStrategy::System(system) => system.as_str().to_string(),
            ConsumerStrategy::Custom(name) => name,
        }
    }
}

impl fmt::Display for ConsumerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
