//! Server responses.

use serde::{Deserialize, Serialize};

/// Body returned by `POST /store/update_item/`.
///
/// `cart_items` is the server-side item count after the action was applied,
/// never a delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdateResponse {
    pub cart_items: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// What the server answered to `POST /process_order/`.
///
/// The body is arbitrary JSON (the server usually sends a bare string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub status: u16,
    pub body: serde_json::Value,
}

impl OrderReceipt {
    /// Whether the status code was 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
