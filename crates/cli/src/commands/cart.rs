//! `store-cli cart` - apply one cart action.

use store_client::{CartControl, CartController};

use super::{CommandError, client_from_env};
use crate::console::ConsoleView;

/// Apply `action` to `product` as if clicked on the page at `page`.
pub async fn run(action: &str, product: Option<String>, page: &str) -> Result<(), CommandError> {
    let cart = CartController::new(client_from_env()?);
    let mut view = ConsoleView::new(page);

    let control = CartControl {
        product,
        action: action.to_string(),
    };

    let outcome = cart.on_click(&mut view, &control).await?;
    tracing::info!(
        cart_items = outcome.cart_items,
        reloaded = outcome.reloaded,
        "Cart action applied"
    );

    Ok(())
}
