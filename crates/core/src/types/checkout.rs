//! Checkout payload sent to `POST /process_order/`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Customer details collected on the checkout page.
///
/// Field values are forwarded as typed by the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    /// Cart total rendered into the page. The server compares it against its
    /// own total and rejects the order on mismatch.
    pub total: Decimal,
}

/// Shipping address collected on the checkout page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
}

/// Body of `POST /process_order/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub form: CustomerInfo,
    pub shipping: ShippingInfo,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_wire_shape() {
        let request = CheckoutRequest {
            form: CustomerInfo {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                total: Decimal::from_str("42.50").unwrap(),
            },
            shipping: ShippingInfo {
                address: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zipcode: "62701".to_string(),
                country: "US".to_string(),
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "form": { "name": "Ada", "email": "ada@example.com", "total": "42.50" },
                "shipping": {
                    "address": "1 Main St",
                    "city": "Springfield",
                    "state": "IL",
                    "zipcode": "62701",
                    "country": "US"
                }
            })
        );
    }
}
