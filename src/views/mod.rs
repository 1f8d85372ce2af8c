//! # Views
//!
//! View controllers for the two pages: the admin [`OrdersView`] and the
//! customer [`CartView`]. Each one owns only trivial view state, receives
//! its collaborators explicitly and renders into plain structs that
//! implement `Display`.
//!
//! User actions return an [`ActionOutcome`] so the caller can tell what
//! happened without inspecting notifications.

pub mod cart;
pub mod orders;
pub mod render;

pub use cart::{CartError, CartPage, CartRow, CartTotals, CartView, QuantityEdit};
pub use orders::OrdersView;
pub use render::{OrderCard, OrdersPage, PaymentState, StatusOption};

/// Result of one user-triggered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The request succeeded and view state was updated.
    Applied,
    /// A precondition failed; no request was sent.
    Skipped,
    /// The backend answered with `success: false`.
    Rejected,
    /// Transport or unexpected failure.
    Failed,
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}
