//! Network endpoint of the event store.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Host and port identifying the event store's HTTP interface.
///
/// No validation happens on construction; a malformed host is reported by
/// whatever layer opens the connection.
///
/// # Examples
///
/// ```
/// use esclient::EndPoint;
///
/// let end_point = EndPoint::new("localhost", 2113);
/// assert_eq!(end_point.host(), "localhost");
/// assert_eq!(end_point.port(), 2113);
/// assert_eq!(end_point.to_string(), "localhost:2113");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndPoint {
    host: String,
    port: u16,
}

impl EndPoint {
    /// Creates a new endpoint.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns the host name or address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for EndPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for EndPoint {
    type Err = Error;

    /// Parses `host:port`, splitting on the last colon.
    ///
    /// # Examples
    ///
    /// ```
    /// use esclient::EndPoint;
    ///
    /// let end_point: EndPoint = "eventstore.local:2114".parse().unwrap();
    /// assert_eq!(end_point, EndPoint::new("eventstore.local", 2114));
    ///
    /// assert!("eventstore.local".parse::<EndPoint>().is_err());
    /// assert!(":2113".parse::<EndPoint>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::InvalidEndPoint {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (host, port) = s.rsplit_once(':').ok_or_else(|| invalid("missing port"))?;
        if host.is_empty() {
            return Err(invalid("missing host"));
        }
        let port = port
            .parse::<u16>()
            .map_err(|_| invalid("port must be a number between 0 and 65535"))?;

        Ok(Self::new(host, port))
    }
}
