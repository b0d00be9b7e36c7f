//! Session identity as rendered into the page by the server.

use serde::{Deserialize, Serialize};

/// Who the current page session belongs to.
///
/// The server renders the user name into the page, or the sentinel
/// [`SessionIdentity::ANONYMOUS_SENTINEL`] when nobody is logged in. Cart
/// actions are only attempted for [`SessionIdentity::User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionIdentity {
    /// No authenticated session.
    #[default]
    Anonymous,
    /// An authenticated user, by display name.
    User(String),
}

impl SessionIdentity {
    /// Identity value the server renders for anonymous visitors.
    pub const ANONYMOUS_SENTINEL: &'static str = "AnonymousUser";

    /// Interpret an identity signal. A missing, empty or sentinel value means
    /// anonymous.
    ///
    /// ```
    /// use store_core::SessionIdentity;
    ///
    /// assert!(SessionIdentity::from_signal(Some("alice")).is_authenticated());
    /// assert!(!SessionIdentity::from_signal(Some("AnonymousUser")).is_authenticated());
    /// assert!(!SessionIdentity::from_signal(None).is_authenticated());
    /// ```
    #[must_use]
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some(name) if !name.is_empty() && name != Self::ANONYMOUS_SENTINEL => {
                Self::User(name.to_owned())
            }
            _ => Self::Anonymous,
        }
    }

    /// Whether this identity may perform cart actions.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }

    /// The user name, if authenticated.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        match self {
            Self::User(name) => Some(name),
            Self::Anonymous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_anonymous() {
        assert_eq!(
            SessionIdentity::from_signal(Some("AnonymousUser")),
            SessionIdentity::Anonymous
        );
    }

    #[test]
    fn test_empty_is_anonymous() {
        assert_eq!(SessionIdentity::from_signal(Some("")), SessionIdentity::Anonymous);
    }

    #[test]
    fn test_named_user() {
        let identity = SessionIdentity::from_signal(Some("bob"));
        assert!(identity.is_authenticated());
        assert_eq!(identity.user_name(), Some("bob"));
    }

    #[test]
    fn test_sentinel_match_is_exact() {
        assert!(SessionIdentity::from_signal(Some("anonymoususer")).is_authenticated());
    }
}
