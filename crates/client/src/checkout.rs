//! Checkout submission.
//!
//! Same request pattern as the cart controls, applied once: the form is
//! posted to `/process_order/` and the page is sent to the home route.

use store_core::{CheckoutRequest, OrderReceipt};
use tracing::{error, info, instrument};

use crate::client::StoreClient;
use crate::error::Result;
use crate::view::StorefrontView;

/// Payment panel content while the request is in flight.
pub const PROCESSING_MESSAGE: &str = "Processing Payment...";

/// Notice shown once the server has received the order.
pub const COMPLETED_NOTICE: &str = "Transaction completed! Your order is being processed.";

/// Payment panel content after a failed submission.
pub const FAILURE_MESSAGE: &str = "An error occurred during payment processing. Please try again.";

/// Drives the checkout page for one session.
#[derive(Debug, Clone)]
pub struct CheckoutController {
    client: StoreClient,
}

impl CheckoutController {
    #[must_use]
    pub const fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Submit the checkout form.
    ///
    /// The details panels are hidden and the payment panel shows
    /// [`PROCESSING_MESSAGE`] before the request is sent. On receipt the
    /// customer is notified and redirected to the home route; on failure the
    /// payment panel shows [`FAILURE_MESSAGE`] and the page stays put.
    ///
    /// # Errors
    ///
    /// See [`StoreClient::process_order`].
    #[instrument(skip(self, view, request))]
    pub async fn submit<V: StorefrontView + ?Sized>(
        &self,
        view: &mut V,
        request: &CheckoutRequest,
    ) -> Result<OrderReceipt> {
        view.hide_checkout_details();
        view.set_payment_message(PROCESSING_MESSAGE);

        match self.client.process_order(request).await {
            Ok(receipt) => {
                info!(status = receipt.status, "Checkout received");
                view.notify(COMPLETED_NOTICE);
                view.redirect(&self.client.config().home_path);
                Ok(receipt)
            }
            Err(e) => {
                error!(error = %e, "Checkout failed");
                view.set_payment_message(FAILURE_MESSAGE);
                Err(e)
            }
        }
    }
}
