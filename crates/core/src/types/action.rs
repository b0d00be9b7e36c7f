//! Cart actions and the `update_item` request payload.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Errors produced while building a cart action request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The action string is not one the server understands.
    #[error("unknown cart action: {0:?}")]
    Unknown(String),
    /// The action applies to a product line but no product was given.
    #[error("cart action {0} requires a product id")]
    MissingProduct(CartAction),
}

/// An operation applied to the cart.
///
/// Serialized as the lowercase wire name (`"add"`, `"remove"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    /// Increase the line quantity by one.
    Add,
    /// Decrease the line quantity by one; the line disappears at zero.
    Remove,
    /// Remove the line regardless of quantity.
    Delete,
    /// Empty the whole cart.
    Clear,
}

impl CartAction {
    /// All actions, in wire order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Remove, Self::Delete, Self::Clear];

    /// Wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Delete => "delete",
            Self::Clear => "clear",
        }
    }

    /// Whether the action targets a single product line.
    #[must_use]
    pub const fn requires_product(self) -> bool {
        !matches!(self, Self::Clear)
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CartAction {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ActionError::Unknown(s.to_owned()))
    }
}

/// Body of `POST /store/update_item/`.
///
/// ```
/// use store_core::{CartAction, CartActionRequest, ProductId};
///
/// let request = CartActionRequest::new(CartAction::Add, Some(ProductId::parse("7").unwrap())).unwrap();
/// let json = serde_json::to_string(&request).unwrap();
/// assert_eq!(json, r#"{"productId":"7","action":"add"}"#);
/// ```
///
/// Deserializing goes through [`CartActionRequest::new`], so a line action
/// without `productId` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCartActionRequest")]
pub struct CartActionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    product_id: Option<ProductId>,
    action: CartAction,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCartActionRequest {
    #[serde(default)]
    product_id: Option<ProductId>,
    action: CartAction,
}

impl TryFrom<RawCartActionRequest> for CartActionRequest {
    type Error = ActionError;

    fn try_from(raw: RawCartActionRequest) -> Result<Self, Self::Error> {
        Self::new(raw.action, raw.product_id)
    }
}

impl CartActionRequest {
    /// Build a request, checking that line actions carry a product.
    ///
    /// A product given with [`CartAction::Clear`] is still sent; the server
    /// ignores it.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingProduct`] when `action` targets a line
    /// and `product_id` is `None`.
    pub fn new(action: CartAction, product_id: Option<ProductId>) -> Result<Self, ActionError> {
        if action.requires_product() && product_id.is_none() {
            return Err(ActionError::MissingProduct(action));
        }
        Ok(Self { product_id, action })
    }

    /// The action to apply.
    #[must_use]
    pub const fn action(&self) -> CartAction {
        self.action
    }

    /// The targeted product, if any.
    #[must_use]
    pub const fn product_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str) -> Option<ProductId> {
        Some(ProductId::parse(id).unwrap())
    }

    #[test]
    fn test_parse_known_actions() {
        assert_eq!("add".parse::<CartAction>().unwrap(), CartAction::Add);
        assert_eq!("remove".parse::<CartAction>().unwrap(), CartAction::Remove);
        assert_eq!("delete".parse::<CartAction>().unwrap(), CartAction::Delete);
        assert_eq!("clear".parse::<CartAction>().unwrap(), CartAction::Clear);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "Add".parse::<CartAction>(),
            Err(ActionError::Unknown("Add".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "increment".parse::<CartAction>(),
            Err(ActionError::Unknown(s)) if s == "increment"
        ));
        assert!("".parse::<CartAction>().is_err());
    }

    #[test]
    fn test_line_actions_need_product() {
        for action in [CartAction::Add, CartAction::Remove, CartAction::Delete] {
            assert_eq!(
                CartActionRequest::new(action, None),
                Err(ActionError::MissingProduct(action))
            );
        }
    }

    #[test]
    fn test_clear_without_product_omits_field() {
        let request = CartActionRequest::new(CartAction::Clear, None).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "action": "clear" }));
    }

    #[test]
    fn test_request_body_keeps_product_verbatim() {
        let request = CartActionRequest::new(CartAction::Delete, product("abc-1")).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "productId": "abc-1", "action": "delete" })
        );
    }

    #[test]
    fn test_request_deserializes_from_wire_shape() {
        let request: CartActionRequest =
            serde_json::from_str(r#"{"productId":"3","action":"remove"}"#).unwrap();
        assert_eq!(request.action(), CartAction::Remove);
        assert_eq!(request.product_id().map(ProductId::as_str), Some("3"));
    }

    #[test]
    fn test_deserialize_rejects_line_action_without_product() {
        for body in [
            r#"{"action":"add"}"#,
            r#"{"action":"remove","productId":null}"#,
        ] {
            let err = serde_json::from_str::<CartActionRequest>(body).unwrap_err();
            assert!(err.to_string().contains("requires a product id"), "{err}");
        }
    }

    #[test]
    fn test_deserialize_clear_without_product() {
        let request: CartActionRequest = serde_json::from_str(r#"{"action":"clear"}"#).unwrap();
        assert_eq!(request.action(), CartAction::Clear);
        assert_eq!(request.product_id(), None);
    }
}
