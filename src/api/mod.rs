//! # Order API
//!
//! The admin panel reaches the backend through the [`OrderApi`] trait. The
//! production implementation is [`HttpOrderApi`]; tests use
//! [`mock::MockOrderApi`] to script responses without a server.
//!
//! Both endpoints wrap their payload in the same envelope:
//!
//! ```text
//! POST {backend}/api/order/list    token: <t>   {}                      -> { success, orders, message? }
//! POST {backend}/api/order/status  token: <t>   { orderId, status }     -> { success, message? }
//! ```
//!
//! [`Envelope::into_result`] turns `success: false` into
//! [`ApiError::Rejected`] so callers only deal with `Result`.

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::HttpOrderApi;

use crate::model::{Order, OrderId, OrderStatus};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Remote order operations used by the admin order list.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Lists every order, in the order the backend returns them.
    async fn list_orders(&self, token: &str) -> Result<Vec<Order>, ApiError>;

    /// Sets the fulfillment status of one order.
    async fn update_status(
        &self,
        token: &str,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), ApiError>;
}

/// Response envelope shared by the order endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.success {
            Ok(self.payload)
        } else {
            Err(ApiError::rejected(self.message))
        }
    }
}

/// Payload of a successful `list` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderList {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Payload-less acknowledgement (the `status` endpoint).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {}
