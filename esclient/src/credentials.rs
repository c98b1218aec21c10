//! User credentials sent with requests.

use std::fmt;

/// A username/password pair.
///
/// The `Debug` output redacts the password, and the pair has no `Serialize`
/// implementation.
///
/// # Examples
///
/// ```
/// use esclient::UserCredentials;
///
/// let credentials = UserCredentials::new("admin", "changeit");
/// assert_eq!(credentials.username(), "admin");
/// assert_eq!(credentials.password(), "changeit");
/// assert!(!format!("{credentials:?}").contains("changeit"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserCredentials {
    username: String,
    password: String,
}

impl UserCredentials {
    /// Creates a new credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_accessors() {
        let credentials = UserCredentials::new("ops", "secret");
        assert_eq!(credentials.username(), "ops");
        assert_eq!(credentials.password(), "secret");
    }

    #[test]
    fn test_connection_settings_debug_redacts_password() {
        let settings = crate::ConnectionSettings::with_defaults(
            crate::EndPoint::new("es", 2113),
            false,
            Some(UserCredentials::new("ops", "hunter2")),
        );
        let debug = format!("{settings:?}");
        assert!(debug.contains("ops"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let debug = format!("{:?}", UserCredentials::new("ops", "hunter2"));
        assert!(debug.contains("ops"));
        assert!(!debug.contains("hunter2"));
    }
}
