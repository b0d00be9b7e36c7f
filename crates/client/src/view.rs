//! The page the client reads from and writes to.
//!
//! Controllers never touch a document directly. A host implements
//! [`StorefrontView`] over whatever it renders into; [`MemoryView`] keeps the
//! state in memory for command-line hosts and tests.

/// Page state the cart and checkout controllers interact with.
pub trait StorefrontView {
    /// Path of the page currently shown (e.g. `/store/cart/`).
    fn current_path(&self) -> &str;

    /// Replace the text of the cart counter badge.
    fn set_cart_count(&mut self, count: u32);

    /// Reload the whole page.
    fn reload(&mut self);

    /// Navigate to another location.
    fn redirect(&mut self, location: &str);

    /// Hide the shipping and user-info panels of the checkout page.
    fn hide_checkout_details(&mut self);

    /// Replace the content of the checkout payment panel.
    fn set_payment_message(&mut self, message: &str);

    /// Show a blocking notice to the customer.
    fn notify(&mut self, message: &str);
}

/// In-memory [`StorefrontView`] that records every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryView {
    path: String,
    /// Text of the cart counter badge.
    pub cart_count: Option<String>,
    /// Number of reloads requested.
    pub reloads: usize,
    /// Last location navigated to.
    pub location: Option<String>,
    /// Whether the checkout details panels are visible.
    pub checkout_details_visible: bool,
    /// Content of the payment panel.
    pub payment_message: Option<String>,
    /// Notices shown, oldest first.
    pub notices: Vec<String>,
}

impl MemoryView {
    /// A view showing `path`, with the checkout panels visible.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            checkout_details_visible: true,
            ..Self::default()
        }
    }

    /// Pre-set the counter badge text.
    #[must_use]
    pub fn with_cart_count(mut self, text: impl Into<String>) -> Self {
        self.cart_count = Some(text.into());
        self
    }
}

impl StorefrontView for MemoryView {
    fn current_path(&self) -> &str {
        &self.path
    }

    fn set_cart_count(&mut self, count: u32) {
        self.cart_count = Some(count.to_string());
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn redirect(&mut self, location: &str) {
        location.clone_into(&mut self.path);
        self.location = Some(location.to_string());
    }

    fn hide_checkout_details(&mut self) {
        self.checkout_details_visible = false;
    }

    fn set_payment_message(&mut self, message: &str) {
        self.payment_message = Some(message.to_string());
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
