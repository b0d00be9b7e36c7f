//! Command implementations.

pub mod cart;
pub mod checkout;

use store_client::{ClientConfig, ClientError, ConfigError, SessionContext, StoreClient};
use store_core::SessionIdentity;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Client configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request could not be made or was rejected.
    #[error("{0}")]
    Client(#[from] ClientError),

    /// The checkout total is not a decimal number.
    #[error("Invalid total: {0}")]
    InvalidTotal(String),
}

/// Build a client for the session described by the environment.
///
/// Reads `STORE_USER` and `STORE_COOKIES` alongside the client settings.
fn client_from_env() -> Result<StoreClient, CommandError> {
    let config = ClientConfig::from_env()?;

    let user = std::env::var("STORE_USER").ok();
    let identity = SessionIdentity::from_signal(user.as_deref());
    let cookies = std::env::var("STORE_COOKIES").unwrap_or_default();
    let context = SessionContext::from_cookies(identity, &cookies, &config.csrf_cookie_name);

    tracing::debug!(?context, "Session loaded");

    Ok(StoreClient::new(config, context)?)
}
