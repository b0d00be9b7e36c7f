//! Core types for the storefront cart client.
//!
//! This module provides type-safe wrappers for the values that cross the
//! wire between the client and the store server.

pub mod action;
pub mod checkout;
pub mod id;
pub mod identity;
pub mod response;

pub use action::{ActionError, CartAction, CartActionRequest};
pub use checkout::{CheckoutRequest, CustomerInfo, ShippingInfo};
pub use id::{ProductId, ProductIdError};
pub use identity::SessionIdentity;
pub use response::{CartUpdateResponse, OrderReceipt};
