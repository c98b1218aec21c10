//! Connection settings for the event store's HTTP interface.

use crate::credentials::UserCredentials;
use crate::endpoint::EndPoint;

/// Host used by [`ConnectionSettings::default`].
pub const DEFAULT_HOST: &str = "localhost";

/// HTTP port used by [`ConnectionSettings::default`].
pub const DEFAULT_HTTP_PORT: u16 = 2113;

/// Immutable description of how to reach the event store.
///
/// Nothing is validated here. A transport layer reads these fields to open
/// the HTTP(S) connection, attach credentials and route to the leader.
///
/// # Examples
///
/// ```
/// use esclient::{ConnectionSettings, EndPoint, UserCredentials};
///
/// let defaults = ConnectionSettings::default();
/// assert_eq!(defaults.end_point(), &EndPoint::new("localhost", 2113));
/// assert!(!defaults.use_ssl_connection());
/// assert!(defaults.default_user_credentials().is_none());
/// assert!(defaults.require_master());
///
/// let secured = ConnectionSettings::new(
///     EndPoint::new("es.internal", 443),
///     true,
///     Some(UserCredentials::new("admin", "changeit")),
///     false,
/// );
/// assert_eq!(secured.base_uri(), "https://es.internal:443");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    end_point: EndPoint,
    use_ssl_connection: bool,
    default_user_credentials: Option<UserCredentials>,
    require_master: bool,
}

impl ConnectionSettings {
    /// Creates connection settings from the given values as-is.
    #[must_use]
    pub fn new(
        end_point: EndPoint,
        use_ssl_connection: bool,
        default_user_credentials: Option<UserCredentials>,
        require_master: bool,
    ) -> Self {
        Self {
            end_point,
            use_ssl_connection,
            default_user_credentials,
            require_master,
        }
    }

    /// Creates connection settings that require the leader node.
    #[must_use]
    pub fn with_defaults(
        end_point: EndPoint,
        use_ssl_connection: bool,
        default_user_credentials: Option<UserCredentials>,
    ) -> Self {
        Self::new(end_point, use_ssl_connection, default_user_credentials, true)
    }

    /// Returns the endpoint of the HTTP interface.
    #[must_use]
    pub fn end_point(&self) -> &EndPoint {
        &self.end_point
    }

    /// Returns `true` if the transport must use TLS.
    #[must_use]
    pub const fn use_ssl_connection(&self) -> bool {
        self.use_ssl_connection
    }

    /// Returns the credentials used when an operation supplies none.
    #[must_use]
    pub fn default_user_credentials(&self) -> Option<&UserCredentials> {
        self.default_user_credentials.as_ref()
    }

    /// Returns `true` if operations must be routed to the leader node.
    #[must_use]
    pub const fn require_master(&self) -> bool {
        self.require_master
    }

    /// Returns the scheme, host and port every request URL starts with.
    #[must_use]
    pub fn base_uri(&self) -> String {
        let scheme = if self.use_ssl_connection {
            "https"
        } else {
            "http"
        };
        format!("{scheme}://{}", self.end_point)
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self::new(
            EndPoint::new(DEFAULT_HOST, DEFAULT_HTTP_PORT),
            false,
            None,
            true,
        )
    }
}
