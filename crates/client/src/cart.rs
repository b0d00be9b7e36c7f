//! Cart controls: add, remove, delete and clear buttons.
//!
//! One click runs one request/response cycle:
//!
//! 1. Parse the control's `data-product` / `data-action` values
//! 2. Check the session is authenticated
//! 3. `POST /store/update_item/`
//! 4. Set the counter badge to the server's count, and reload the page when
//!    it is the cart listing
//!
//! Nothing in the view changes unless step 3 succeeds. Concurrent clicks are
//! not de-duplicated; each one issues its own request.

use store_core::{CartAction, CartActionRequest, ProductId};
use tracing::{debug, instrument};

use crate::client::StoreClient;
use crate::error::Result;
use crate::view::StorefrontView;

/// The values carried by a cart button, as rendered by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartControl {
    /// `data-product` attribute; may be absent for `clear`.
    pub product: Option<String>,
    /// `data-action` attribute.
    pub action: String,
}

impl CartControl {
    /// A control targeting one product.
    #[must_use]
    pub fn new(product: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            product: Some(product.into()),
            action: action.into(),
        }
    }

    /// Validate the control into a request.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown action, an empty product id, or a
    /// line action without a product.
    pub fn to_request(&self) -> Result<CartActionRequest> {
        let action: CartAction = self.action.parse()?;
        let product = self.product.as_deref().map(ProductId::parse).transpose()?;
        Ok(CartActionRequest::new(action, product)?)
    }
}

/// What a successful click did to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartUpdateOutcome {
    /// Server-side item count now shown on the badge.
    pub cart_items: u32,
    /// Whether the page was reloaded because it is the cart listing.
    pub reloaded: bool,
}

/// Drives cart updates for one page session.
#[derive(Debug, Clone)]
pub struct CartController {
    client: StoreClient,
}

impl CartController {
    #[must_use]
    pub const fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Send a cart action and return the server's response.
    ///
    /// `product_id` may be `None` only for [`CartAction::Clear`]. This is the
    /// request half of a click and never touches the view; use
    /// [`Self::on_click`] or [`Self::apply`] for the full cycle including the
    /// counter update and cart-page reload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidAction`](crate::ClientError::InvalidAction)
    /// for a line action without a product, before anything is sent. Otherwise
    /// see [`StoreClient::update_item`].
    pub async fn submit_cart_action(
        &self,
        product_id: Option<ProductId>,
        action: CartAction,
    ) -> Result<store_core::CartUpdateResponse> {
        let request = CartActionRequest::new(action, product_id)?;
        self.client.update_item(&request).await
    }

    /// Handle a click on a cart control.
    ///
    /// # Errors
    ///
    /// Returns the validation, authentication or request error. The view is
    /// unchanged in every error case.
    #[instrument(skip(self, view), fields(product = ?control.product, action = %control.action))]
    pub async fn on_click<V: StorefrontView + ?Sized>(
        &self,
        view: &mut V,
        control: &CartControl,
    ) -> Result<CartUpdateOutcome> {
        debug!("Cart button clicked");

        let request = control.to_request()?;
        self.apply(view, &request).await
    }

    /// Send a validated request and reconcile the view with the response.
    ///
    /// # Errors
    ///
    /// See [`StoreClient::update_item`].
    pub async fn apply<V: StorefrontView + ?Sized>(
        &self,
        view: &mut V,
        request: &CartActionRequest,
    ) -> Result<CartUpdateOutcome> {
        let update = self.client.update_item(request).await?;

        view.set_cart_count(update.cart_items);
        debug!(cart_items = update.cart_items, "Cart count updated");

        let reloaded = view
            .current_path()
            .contains(self.client.config().cart_page_path.as_str());
        if reloaded {
            view.reload();
        }

        Ok(CartUpdateOutcome {
            cart_items: update.cart_items,
            reloaded,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use store_core::{ActionError, ProductIdError};

    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_control_to_request() {
        let request = CartControl::new("12", "remove").to_request().unwrap();
        assert_eq!(request.action(), CartAction::Remove);
        assert_eq!(request.product_id().unwrap().as_str(), "12");
    }

    #[test]
    fn test_control_unknown_action() {
        let err = CartControl::new("12", "explode").to_request().unwrap_err();
        assert!(matches!(
            err,
            ClientError::InvalidAction(ActionError::Unknown(ref s)) if s == "explode"
        ));
    }

    #[test]
    fn test_control_empty_product() {
        let err = CartControl::new("", "add").to_request().unwrap_err();
        assert!(matches!(
            err,
            ClientError::InvalidProductId(ProductIdError::Empty)
        ));
    }

    #[test]
    fn test_control_missing_product() {
        let control = CartControl {
            product: None,
            action: "delete".to_string(),
        };
        assert!(matches!(
            control.to_request().unwrap_err(),
            ClientError::InvalidAction(ActionError::MissingProduct(CartAction::Delete))
        ));
    }

    #[test]
    fn test_clear_control_needs_no_product() {
        let control = CartControl {
            product: None,
            action: "clear".to_string(),
        };
        assert_eq!(control.to_request().unwrap().action(), CartAction::Clear);
    }

    #[tokio::test]
    async fn test_submit_line_action_without_product_is_rejected() {
        let config = crate::ClientConfig::new(url::Url::parse("http://127.0.0.1:9").unwrap());
        let client = StoreClient::new(config, crate::SessionContext::anonymous()).unwrap();
        let cart = CartController::new(client);

        let err = cart
            .submit_cart_action(None, CartAction::Add)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::InvalidAction(ActionError::MissingProduct(CartAction::Add))
        ));
        assert!(err.is_rejected_locally());
    }
}
