//! Per-session values injected into the client.
//!
//! The page used to expose the user name and the anti-forgery token as
//! globals. Here they are read once by the host and handed to the client
//! explicitly.

use secrecy::{ExposeSecret, SecretString};
use store_core::{SessionIdentity, get_cookie};

/// Identity, anti-forgery token and cookies of the current page session.
///
/// Implements `Debug` manually to redact secret fields.
#[derive(Clone)]
pub struct SessionContext {
    identity: SessionIdentity,
    csrf_token: Option<SecretString>,
    cookie_header: Option<SecretString>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("identity", &self.identity)
            .field(
                "csrf_token",
                &self.csrf_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "cookie_header",
                &self.cookie_header.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl SessionContext {
    /// Create a context from explicit values.
    #[must_use]
    pub const fn new(identity: SessionIdentity, csrf_token: Option<SecretString>) -> Self {
        Self {
            identity,
            csrf_token,
            cookie_header: None,
        }
    }

    /// Create a context from the page's cookie string.
    ///
    /// The anti-forgery token is parsed out of `cookie_header` under
    /// `csrf_cookie_name`, and the whole header is forwarded on every request
    /// so the server can find the session.
    #[must_use]
    pub fn from_cookies(
        identity: SessionIdentity,
        cookie_header: &str,
        csrf_cookie_name: &str,
    ) -> Self {
        let csrf_token = get_cookie(cookie_header, csrf_cookie_name).map(SecretString::from);
        let cookie_header = if cookie_header.trim().is_empty() {
            None
        } else {
            Some(SecretString::from(cookie_header.to_string()))
        };

        Self {
            identity,
            csrf_token,
            cookie_header,
        }
    }

    /// An anonymous context with no cookies.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self::new(SessionIdentity::Anonymous, None)
    }

    /// The session identity.
    #[must_use]
    pub const fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    /// The anti-forgery token, if the cookie was present.
    #[must_use]
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_ref().map(|s| s.expose_secret())
    }

    /// The raw cookie string to forward, if any.
    #[must_use]
    pub fn cookie_header(&self) -> Option<&str> {
        self.cookie_header.as_ref().map(|s| s.expose_secret())
    }
}
