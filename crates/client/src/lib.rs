//! Storefront cart client library.
//!
//! Talks to the store server's JSON endpoints on behalf of a page session:
//!
//! - [`CartController`] turns clicks on add/remove/delete/clear controls into
//!   `POST /store/update_item/` and keeps the cart counter in sync
//! - [`CheckoutController`] submits the checkout form to `POST /process_order/`
//!
//! # Example
//!
//! ```rust,no_run
//! use store_client::{CartControl, CartController, ClientConfig, MemoryView, SessionContext, StoreClient};
//! use store_core::SessionIdentity;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let context = SessionContext::from_cookies(
//!     SessionIdentity::from_signal(Some("alice")),
//!     "sessionid=abc; csrftoken=XYZ",
//!     &config.csrf_cookie_name,
//! );
//! let cart = CartController::new(StoreClient::new(config, context)?);
//!
//! let mut view = MemoryView::new("/store/");
//! let outcome = cart.on_click(&mut view, &CartControl::new("42", "add")).await?;
//! assert_eq!(view.cart_count, Some(outcome.cart_items.to_string()));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod view;

pub use cart::{CartControl, CartController, CartUpdateOutcome};
pub use checkout::CheckoutController;
pub use client::StoreClient;
pub use config::{ClientConfig, ConfigError};
pub use context::SessionContext;
pub use error::ClientError;
pub use view::{MemoryView, StorefrontView};
