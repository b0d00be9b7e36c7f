//! Errors returned by the store client.

use store_core::{ActionError, ProductIdError};
use thiserror::Error;

/// Errors that can occur while talking to the store server.
///
/// A request that fails leaves the view as it was before the click; the
/// checkout submitter additionally replaces the payment panel message.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The control carried an action the server does not understand.
    #[error("Invalid cart action: {0}")]
    InvalidAction(#[from] ActionError),

    /// The control carried an empty product id.
    #[error("Invalid product id: {0}")]
    InvalidProductId(#[from] ProductIdError),

    /// Cart actions require a logged-in session.
    #[error("Authentication required to update the cart")]
    Unauthenticated,

    /// The session cookies do not contain the anti-forgery token.
    #[error("Missing anti-forgery cookie: {0}")]
    MissingCsrfToken(String),

    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP error! Status: {status}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An endpoint path could not be resolved against the base URL.
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// Whether the error was raised before anything was sent.
    #[must_use]
    pub const fn is_rejected_locally(&self) -> bool {
        matches!(
            self,
            Self::InvalidAction(_)
                | Self::InvalidProductId(_)
                | Self::Unauthenticated
                | Self::MissingCsrfToken(_)
                | Self::Url(_)
        )
    }
}

/// Result type alias for `ClientError`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ClientError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error! Status: 500");
    }

    #[test]
    fn test_local_rejections() {
        assert!(ClientError::Unauthenticated.is_rejected_locally());
        assert!(ClientError::InvalidAction(ActionError::Unknown("x".to_string())).is_rejected_locally());
        assert!(
            !ClientError::Status {
                status: 404,
                body: String::new()
            }
            .is_rejected_locally()
        );
    }
}
