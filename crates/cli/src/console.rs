//! A [`StorefrontView`] that reports page changes through `tracing`.

use store_client::{MemoryView, StorefrontView};

/// Keeps the page state in memory and logs every change.
#[derive(Debug)]
pub struct ConsoleView {
    inner: MemoryView,
}

impl ConsoleView {
    pub fn new(path: &str) -> Self {
        Self {
            inner: MemoryView::new(path),
        }
    }
}

impl StorefrontView for ConsoleView {
    fn current_path(&self) -> &str {
        self.inner.current_path()
    }

    fn set_cart_count(&mut self, count: u32) {
        tracing::info!(cart_items = count, "Cart count updated");
        self.inner.set_cart_count(count);
    }

    fn reload(&mut self) {
        tracing::info!(path = %self.inner.current_path(), "Page reload");
        self.inner.reload();
    }

    fn redirect(&mut self, location: &str) {
        tracing::info!(location, "Redirect");
        self.inner.redirect(location);
    }

    fn hide_checkout_details(&mut self) {
        self.inner.hide_checkout_details();
    }

    fn set_payment_message(&mut self, message: &str) {
        tracing::info!(message, "Payment panel");
        self.inner.set_payment_message(message);
    }

    fn notify(&mut self, message: &str) {
        tracing::info!(message, "Notice");
        self.inner.notify(message);
    }
}
