//! # Admin Order List
//!
//! Fetches every order for the admin, shows them most recent first and lets
//! the admin move an order through its fulfillment stages.
//!
//! ## Status updates
//!
//! Selecting a new status applies it to the local order straight away, then
//! sends it to the backend:
//!
//! - on success the full list is fetched again, so the server's value is what
//!   ends up displayed;
//! - on failure the previous status is put back.
//!
//! If the update succeeds but the refresh does not, the action reports the
//! refresh's outcome and the locally applied status stays.
//!
//! The refresh only starts after the update call has returned.
use crate::api::{ApiError, OrderApi};
use crate::config::StorefrontConfig;
use crate::model::{Order, OrderId, OrderStatus};
use crate::notify::Notifier;
use crate::views::render::{OrderCard, OrdersPage};
use crate::views::ActionOutcome;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub const MSG_TOKEN_MISSING: &str = "Authentication token is missing.";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch orders.";
pub const MSG_FETCH_ERROR: &str = "Something went wrong. Please try again later.";
pub const MSG_STATUS_UPDATED: &str = "Order status updated successfully.";
pub const MSG_STATUS_FAILED: &str = "Failed to update status.";
pub const MSG_STATUS_ERROR: &str = "Failed to update status. Please try again later.";

pub struct OrdersView {
    api: Arc<dyn OrderApi>,
    notifier: Arc<dyn Notifier>,
    config: StorefrontConfig,
    token: Option<String>,
    orders: Vec<Order>,
}

impl OrdersView {
    pub fn new(
        api: Arc<dyn OrderApi>,
        notifier: Arc<dyn Notifier>,
        config: StorefrontConfig,
        token: Option<String>,
    ) -> Self {
        Self {
            api,
            notifier,
            config,
            token,
            orders: Vec::new(),
        }
    }

    /// Orders currently displayed, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == order_id)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Initial load.
    pub async fn mount(&mut self) -> ActionOutcome {
        self.fetch_all_orders().await
    }

    /// Replaces the token and reloads, but only if the token actually changed.
    pub async fn set_token(&mut self, token: Option<String>) -> Option<ActionOutcome> {
        if self.token == token {
            return None;
        }
        self.token = token;
        Some(self.fetch_all_orders().await)
    }

    #[instrument(skip(self))]
    pub async fn fetch_all_orders(&mut self) -> ActionOutcome {
        let Some(token) = self.active_token() else {
            warn!("No token, skipping order fetch");
            self.notifier.warning(MSG_TOKEN_MISSING);
            return ActionOutcome::Skipped;
        };

        match self.api.list_orders(&token).await {
            Ok(mut orders) => {
                orders.reverse();
                info!(count = orders.len(), "Orders loaded");
                self.orders = orders;
                ActionOutcome::Applied
            }
            Err(e) => self.report(e, MSG_FETCH_FAILED, MSG_FETCH_ERROR),
        }
    }

    /// Sends a new status for one order, then reloads the list.
    ///
    /// Once the backend accepts the update, the result is that of the
    /// refresh: `Applied` only if the reloaded list was also applied. A
    /// failed refresh leaves the accepted status in place.
    #[instrument(skip(self, order_id, new_status), fields(order_id = %order_id, status = %new_status))]
    pub async fn status_handler(
        &mut self,
        order_id: &OrderId,
        new_status: OrderStatus,
    ) -> ActionOutcome {
        let Some(token) = self.active_token() else {
            warn!("No token, skipping status update");
            self.notifier.warning(MSG_TOKEN_MISSING);
            return ActionOutcome::Skipped;
        };

        let previous = self.apply_status(order_id, new_status);
        debug!(?previous, "Status applied locally");

        match self.api.update_status(&token, order_id, new_status).await {
            Ok(()) => {
                self.notifier.success(MSG_STATUS_UPDATED);
                let refresh = self.fetch_all_orders().await;
                debug!(?refresh, "Orders refreshed after status update");
                refresh
            }
            Err(e) => {
                if let Some(previous) = previous {
                    self.apply_status(order_id, previous);
                }
                self.report(e, MSG_STATUS_FAILED, MSG_STATUS_ERROR)
            }
        }
    }

    /// Handles a raw selector value. Unknown labels are ignored.
    pub async fn select_status(&mut self, order_id: &OrderId, value: &str) -> ActionOutcome {
        match OrderStatus::from_label(value) {
            Some(status) => self.status_handler(order_id, status).await,
            None => {
                warn!(%order_id, value, "Unknown status label");
                ActionOutcome::Skipped
            }
        }
    }

    pub fn render(&self) -> OrdersPage {
        OrdersPage {
            cards: self
                .orders
                .iter()
                .map(|order| OrderCard::from_order(order, &self.config))
                .collect(),
        }
    }

    fn active_token(&self) -> Option<String> {
        self.token.clone().filter(|t| !t.is_empty())
    }

    /// Sets the local status of an order, returning the one it replaced.
    fn apply_status(&mut self, order_id: &OrderId, status: OrderStatus) -> Option<OrderStatus> {
        self.orders
            .iter_mut()
            .find(|o| &o.id == order_id)
            .map(|order| std::mem::replace(&mut order.status, status))
    }

    fn report(&self, e: ApiError, fallback: &str, generic: &str) -> ActionOutcome {
        if e.is_rejection() {
            warn!(error = %e, "Request rejected");
            self.notifier.error(e.server_message().unwrap_or(fallback));
            ActionOutcome::Rejected
        } else {
            error!(error = %e, "Request failed");
            self.notifier.error(generic);
            ActionOutcome::Failed
        }
    }
}
