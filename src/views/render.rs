//! Render models for the admin order list.
//!
//! These are plain data: a front end draws them however it likes, and the
//! `Display` impls give a text rendering used by the demo binary and tests.

use crate::config::StorefrontConfig;
use crate::model::{Order, OrderId, OrderStatus};
use std::fmt::{self, Display};

pub const EMPTY_ORDERS: &str = "No orders found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentState {
    Done,
    Pending,
}

impl Display for PaymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentState::Done => f.write_str("Done"),
            PaymentState::Pending => f.write_str("Pending"),
        }
    }
}

/// One entry of the status selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOption {
    pub status: OrderStatus,
    pub selected: bool,
}

/// Everything shown for one order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCard {
    pub order_id: OrderId,
    /// `"{name} X {quantity} {size}"` per item.
    pub items: Vec<String>,
    pub customer_name: String,
    pub street_line: String,
    pub locality_line: String,
    pub phone: String,
    pub item_count: usize,
    pub payment_method: String,
    pub payment: PaymentState,
    /// en-US long date, e.g. `November 14, 2023`.
    pub date: String,
    pub amount: String,
    pub status_options: Vec<StatusOption>,
}

impl OrderCard {
    pub fn from_order(order: &Order, config: &StorefrontConfig) -> Self {
        let address = order.address.clone().unwrap_or_default();
        Self {
            order_id: order.id.clone(),
            items: order
                .items
                .iter()
                .map(|item| format!("{} X {} {}", item.name, item.quantity, item.size))
                .collect(),
            customer_name: format!("{} {}", address.first_name, address.last_name)
                .trim()
                .to_string(),
            street_line: format!("{},", address.street),
            locality_line: format!(
                "{}, {}, {}, {}",
                address.city, address.state, address.country, address.zipcode
            ),
            phone: address.phone,
            item_count: order.items.len(),
            payment_method: order.payment_method.clone(),
            payment: if order.payment {
                PaymentState::Done
            } else {
                PaymentState::Pending
            },
            date: order.date.format("%B %-d, %Y").to_string(),
            amount: config.price(order.amount),
            status_options: OrderStatus::ALL
                .into_iter()
                .map(|status| StatusOption {
                    status,
                    selected: status == order.status,
                })
                .collect(),
        }
    }

    /// The status currently selected in the selector.
    pub fn selected_status(&self) -> Option<OrderStatus> {
        self.status_options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.status)
    }
}

impl Display for OrderCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.order_id)?;
        writeln!(f, "  {}", self.items.join(", "))?;
        writeln!(f, "  {}", self.customer_name)?;
        writeln!(f, "  {}", self.street_line)?;
        writeln!(f, "  {}", self.locality_line)?;
        writeln!(f, "  {}", self.phone)?;
        writeln!(f, "  Items: {}", self.item_count)?;
        writeln!(f, "  Method: {}", self.payment_method)?;
        writeln!(f, "  Payment: {}", self.payment)?;
        writeln!(f, "  Date: {}", self.date)?;
        writeln!(f, "  Amount: {}", self.amount)?;
        match self.selected_status() {
            Some(status) => writeln!(f, "  Status: {}", status),
            None => writeln!(f, "  Status: -"),
        }
    }
}

/// The whole admin order page.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersPage {
    pub cards: Vec<OrderCard>,
}

impl Display for OrdersPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order Page")?;
        if self.cards.is_empty() {
            return writeln!(f, "{}", EMPTY_ORDERS);
        }
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
