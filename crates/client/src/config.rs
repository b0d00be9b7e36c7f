//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STORE_BASE_URL` - Origin of the store server (e.g., `https://shop.example.com`)
//!
//! ## Optional
//! - `STORE_UPDATE_ITEM_PATH` - Cart update endpoint (default: `/store/update_item/`)
//! - `STORE_PROCESS_ORDER_PATH` - Checkout endpoint (default: `/process_order/`)
//! - `STORE_CART_PAGE_PATH` - Path fragment of the cart listing (default: `/store/cart/`)
//! - `STORE_HOME_PATH` - Redirect target after checkout (default: `/`, the site root)
//! - `STORE_CSRF_COOKIE_NAME` - Cookie holding the anti-forgery token (default: `csrftoken`)
//! - `STORE_STRICT_CHECKOUT_STATUS` - Treat non-2xx checkout responses as failures (default: `false`)

use thiserror::Error;
use url::Url;

pub const DEFAULT_UPDATE_ITEM_PATH: &str = "/store/update_item/";
pub const DEFAULT_PROCESS_ORDER_PATH: &str = "/process_order/";
pub const DEFAULT_CART_PAGE_PATH: &str = "/store/cart/";
pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_CSRF_COOKIE_NAME: &str = "csrftoken";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin every endpoint path is joined onto
    pub base_url: Url,
    /// Path of the cart update endpoint
    pub update_item_path: String,
    /// Path of the checkout endpoint
    pub process_order_path: String,
    /// A view whose path contains this fragment is reloaded after a cart update
    pub cart_page_path: String,
    /// Where the view is sent after checkout
    pub home_path: String,
    /// Name of the cookie carrying the anti-forgery token
    pub csrf_cookie_name: String,
    /// Fail checkout on non-2xx responses instead of accepting any JSON reply
    pub strict_checkout_status: bool,
}

impl ClientConfig {
    /// Configuration with default paths for the given server origin.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            update_item_path: DEFAULT_UPDATE_ITEM_PATH.to_string(),
            process_order_path: DEFAULT_PROCESS_ORDER_PATH.to_string(),
            cart_page_path: DEFAULT_CART_PAGE_PATH.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
            csrf_cookie_name: DEFAULT_CSRF_COOKIE_NAME.to_string(),
            strict_checkout_status: false,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `STORE_BASE_URL` is missing or any variable
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_base = lookup("STORE_BASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("STORE_BASE_URL".to_string()))?;
        let base_url = Url::parse(&raw_base)
            .map_err(|e| ConfigError::InvalidEnvVar("STORE_BASE_URL".to_string(), e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidEnvVar(
                "STORE_BASE_URL".to_string(),
                "must be an http(s) origin".to_string(),
            ));
        }

        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let strict_checkout_status = match lookup("STORE_STRICT_CHECKOUT_STATUS") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "STORE_STRICT_CHECKOUT_STATUS".to_string(),
                    format!("expected true/false, got {value:?}"),
                )
            })?,
            None => false,
        };

        Ok(Self {
            base_url,
            update_item_path: or_default("STORE_UPDATE_ITEM_PATH", DEFAULT_UPDATE_ITEM_PATH),
            process_order_path: or_default("STORE_PROCESS_ORDER_PATH", DEFAULT_PROCESS_ORDER_PATH),
            cart_page_path: or_default("STORE_CART_PAGE_PATH", DEFAULT_CART_PAGE_PATH),
            home_path: or_default("STORE_HOME_PATH", DEFAULT_HOME_PATH),
            csrf_cookie_name: or_default("STORE_CSRF_COOKIE_NAME", DEFAULT_CSRF_COOKIE_NAME),
            strict_checkout_status,
        })
    }

    /// Resolve an endpoint path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `path` cannot be joined.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ClientConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ClientConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_missing_base_url() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref k) if k == "STORE_BASE_URL"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = load(&[("STORE_BASE_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_non_base_url_rejected() {
        let err = load(&[("STORE_BASE_URL", "mailto:shop@example.com")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("STORE_BASE_URL", "https://shop.example.com")]).unwrap();
        assert_eq!(config.update_item_path, "/store/update_item/");
        assert_eq!(config.process_order_path, "/process_order/");
        assert_eq!(config.cart_page_path, "/store/cart/");
        assert_eq!(config.home_path, "/");
        assert_eq!(config.csrf_cookie_name, "csrftoken");
        assert!(!config.strict_checkout_status);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STORE_BASE_URL", "http://localhost:8000"),
            ("STORE_HOME_PATH", "/store/"),
            ("STORE_CSRF_COOKIE_NAME", "xsrf"),
            ("STORE_STRICT_CHECKOUT_STATUS", "yes"),
        ])
        .unwrap();
        assert_eq!(config.home_path, "/store/");
        assert_eq!(config.csrf_cookie_name, "xsrf");
        assert!(config.strict_checkout_status);
    }

    #[test]
    fn test_invalid_bool() {
        let err = load(&[
            ("STORE_BASE_URL", "http://localhost:8000"),
            ("STORE_STRICT_CHECKOUT_STATUS", "maybe"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "STORE_STRICT_CHECKOUT_STATUS"));
    }

    #[test]
    fn test_endpoint_join() {
        let config = ClientConfig::new(Url::parse("http://127.0.0.1:8000").unwrap());
        assert_eq!(
            config.endpoint(&config.update_item_path).unwrap().as_str(),
            "http://127.0.0.1:8000/store/update_item/"
        );
    }
}
