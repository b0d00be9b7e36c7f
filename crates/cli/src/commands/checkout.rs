//! `store-cli checkout` - submit the checkout form.

use std::str::FromStr;

use rust_decimal::Decimal;
use store_client::CheckoutController;
use store_core::{CheckoutRequest, CustomerInfo, ShippingInfo};

use super::{CommandError, client_from_env};
use crate::console::ConsoleView;

/// Checkout form fields as entered on the command line.
#[derive(Debug)]
pub struct CheckoutArgs {
    pub name: String,
    pub email: String,
    pub total: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
}

impl CheckoutArgs {
    fn into_request(self) -> Result<CheckoutRequest, CommandError> {
        let total = Decimal::from_str(self.total.trim())
            .map_err(|e| CommandError::InvalidTotal(format!("{}: {e}", self.total)))?;

        Ok(CheckoutRequest {
            form: CustomerInfo {
                name: self.name,
                email: self.email,
                total,
            },
            shipping: ShippingInfo {
                address: self.address,
                city: self.city,
                state: self.state,
                zipcode: self.zipcode,
                country: self.country,
            },
        })
    }
}

/// Submit the form from the checkout page at `page`.
pub async fn run(args: CheckoutArgs, page: &str) -> Result<(), CommandError> {
    let request = args.into_request()?;
    let checkout = CheckoutController::new(client_from_env()?);
    let mut view = ConsoleView::new(page);

    let receipt = checkout.submit(&mut view, &request).await?;
    tracing::info!(status = receipt.status, body = %receipt.body, "Order submitted");

    Ok(())
}
