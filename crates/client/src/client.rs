//! HTTP client for the store server's JSON endpoints.
//!
//! Every call is a single POST carrying the `X-CSRFToken` header and the
//! session cookies. There is no timeout and no retry.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderValue};
use serde::Serialize;
use store_core::{CartActionRequest, CartUpdateResponse, CheckoutRequest, OrderReceipt};
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::context::SessionContext;
use crate::error::{ClientError, Result};

/// Anti-forgery header checked by the server on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Longest slice of a response body kept in logs and errors.
const BODY_PREVIEW_CHARS: usize = 500;

// =============================================================================
// StoreClient
// =============================================================================

/// Client for the store server's cart and checkout endpoints.
///
/// Cheap to clone; clones share the connection pool and session context.
#[derive(Clone, Debug)]
pub struct StoreClient {
    inner: Arc<StoreClientInner>,
}

#[derive(Debug)]
struct StoreClientInner {
    client: reqwest::Client,
    config: ClientConfig,
    context: SessionContext,
}

impl StoreClient {
    /// Create a new client bound to one page session.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: ClientConfig, context: SessionContext) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("store-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(StoreClientInner {
                client,
                config,
                context,
            }),
        })
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The injected session context.
    #[must_use]
    pub fn context(&self) -> &SessionContext {
        &self.inner.context
    }

    /// Apply a cart action on the server and return the new item count.
    ///
    /// Nothing is sent unless the session identity is authenticated.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unauthenticated`] for anonymous sessions
    /// - [`ClientError::MissingCsrfToken`] if the anti-forgery cookie is absent
    /// - [`ClientError::Http`] on network failure
    /// - [`ClientError::Status`] on a non-2xx response
    /// - [`ClientError::Parse`] if the body is not `{"cartItems": n}`
    #[instrument(skip(self, request), fields(action = %request.action(), product = ?request.product_id()))]
    pub async fn update_item(&self, request: &CartActionRequest) -> Result<CartUpdateResponse> {
        if !self.context().identity().is_authenticated() {
            warn!("Authentication required: please log in to update the cart");
            return Err(ClientError::Unauthenticated);
        }

        let url = self.inner.config.endpoint(&self.inner.config.update_item_path)?;
        let response = self.post_json(url, request).await?;

        let status = response.status();
        let body = read_body(response).await?;

        if !status.is_success() {
            error!(
                status = %status,
                body = %preview(&body),
                "Could not update cart"
            );
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: preview(&body),
            });
        }

        let update: CartUpdateResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, body = %preview(&body), "Failed to parse cart update response");
            ClientError::Parse(e)
        })?;

        debug!(cart_items = update.cart_items, "Cart updated");

        Ok(update)
    }

    /// Submit the checkout form.
    ///
    /// Any JSON reply counts as receipt. With
    /// [`ClientConfig::strict_checkout_status`] a non-2xx status is an error
    /// instead.
    ///
    /// # Errors
    ///
    /// - [`ClientError::MissingCsrfToken`] if the anti-forgery cookie is absent
    /// - [`ClientError::Http`] on network failure
    /// - [`ClientError::Parse`] if the body is not JSON
    /// - [`ClientError::Status`] on a non-2xx response in strict mode
    #[instrument(skip(self, request))]
    pub async fn process_order(&self, request: &CheckoutRequest) -> Result<OrderReceipt> {
        let url = self.inner.config.endpoint(&self.inner.config.process_order_path)?;
        let response = self.post_json(url, request).await?;

        let status = response.status();
        let body = read_body(response).await?;

        if self.inner.config.strict_checkout_status && !status.is_success() {
            error!(status = %status, body = %preview(&body), "Checkout rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: preview(&body),
            });
        }

        let body: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, body = %preview(&body), "Failed to parse checkout response");
            ClientError::Parse(e)
        })?;

        let receipt = OrderReceipt {
            status: status.as_u16(),
            body,
        };

        if receipt.is_success() {
            debug!(status = receipt.status, "Order submitted");
        } else {
            warn!(
                status = receipt.status,
                body = %receipt.body,
                "Checkout returned non-success status; treating as received"
            );
        }

        Ok(receipt)
    }

    /// POST a JSON body with the anti-forgery header and session cookies.
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<reqwest::Response> {
        let context = &self.inner.context;
        let token = context.csrf_token().ok_or_else(|| {
            ClientError::MissingCsrfToken(self.inner.config.csrf_cookie_name.clone())
        })?;

        let mut request = self
            .inner
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(CSRF_HEADER, token)
            .json(body);

        if let Some(cookies) = context.cookie_header() {
            request = request.header(COOKIE, cookies);
        }

        request.send().await.map_err(fetch_error)
    }
}

/// Read the whole response body, logging a dropped connection like a failed send.
async fn read_body(response: reqwest::Response) -> Result<String> {
    response.text().await.map_err(fetch_error)
}

fn fetch_error(e: reqwest::Error) -> ClientError {
    error!(error = %e, "Fetch error");
    ClientError::Http(e)
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use store_core::{CartAction, ProductId, SessionIdentity};

    use super::*;

    fn client(context: SessionContext) -> StoreClient {
        // Port 9 (discard) is never reached in these tests.
        let config = ClientConfig::new(Url::parse("http://127.0.0.1:9").unwrap());
        StoreClient::new(config, context).unwrap()
    }

    fn add_request() -> CartActionRequest {
        CartActionRequest::new(CartAction::Add, Some(ProductId::parse("1").unwrap())).unwrap()
    }

    #[tokio::test]
    async fn test_anonymous_is_rejected_before_sending() {
        let client = client(SessionContext::from_cookies(
            SessionIdentity::from_signal(Some("AnonymousUser")),
            "csrftoken=abc",
            "csrftoken",
        ));
        let err = client.update_item(&add_request()).await.unwrap_err();
        assert!(matches!(err, ClientError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_missing_token_is_rejected_before_sending() {
        let client = client(SessionContext::from_cookies(
            SessionIdentity::User("alice".to_string()),
            "sessionid=1",
            "csrftoken",
        ));
        let err = client.update_item(&add_request()).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingCsrfToken(ref name) if name == "csrftoken"));
    }

    #[test]
    fn test_preview_truncates() {
        let long = "x".repeat(BODY_PREVIEW_CHARS + 10);
        assert_eq!(preview(&long).len(), BODY_PREVIEW_CHARS);
    }
}
