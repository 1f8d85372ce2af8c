//! # Mock Order API
//!
//! Scriptable [`OrderApi`] for testing views without a backend.
//!
//! Expectations are consumed in FIFO order. Every call is recorded, so a
//! test can also assert that *no* request was made.
//!
//! ```rust
//! use storefront::api::mock::MockOrderApi;
//! use storefront::api::OrderApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockOrderApi::new();
//!     mock.expect_list().return_rejected("Not Authorized");
//!
//!     let result = mock.list_orders("t").await;
//!     assert!(result.unwrap_err().is_rejection());
//!     mock.verify();
//! }
//! ```

use crate::api::{ApiError, OrderApi};
use crate::model::{Order, OrderId, OrderStatus};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A scripted reply for one expected call.
#[derive(Debug)]
enum Reply<T> {
    Ok(T),
    Rejected(Option<String>),
    Failure(String),
}

impl<T> Reply<T> {
    fn into_result(self) -> Result<T, ApiError> {
        match self {
            Reply::Ok(value) => Ok(value),
            Reply::Rejected(message) => Err(ApiError::rejected(message)),
            Reply::Failure(reason) => Err(ApiError::Decode(reason)),
        }
    }
}

#[derive(Debug)]
enum Expectation {
    List(Reply<Vec<Order>>),
    UpdateStatus {
        order_id: OrderId,
        status: OrderStatus,
        reply: Reply<()>,
    },
}

/// A call received by the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    List {
        token: String,
    },
    UpdateStatus {
        token: String,
        order_id: OrderId,
        status: OrderStatus,
    },
}

/// Expectation-driven [`OrderApi`] double.
#[derive(Clone, Default)]
pub struct MockOrderApi {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockOrderApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list_orders` call.
    pub fn expect_list(&self) -> ListExpectationBuilder {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update_status` call for exactly this order and status.
    pub fn expect_update_status(
        &self,
        order_id: impl Into<OrderId>,
        status: OrderStatus,
    ) -> UpdateStatusExpectationBuilder {
        UpdateStatusExpectationBuilder {
            order_id: order_id.into(),
            status,
            expectations: self.expectations.clone(),
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self) -> Option<Expectation> {
        self.expectations.lock().unwrap().pop_front()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl OrderApi for MockOrderApi {
    async fn list_orders(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        self.record(RecordedCall::List {
            token: token.to_string(),
        });
        match self.next() {
            Some(Expectation::List(reply)) => reply.into_result(),
            other => panic!("Unexpected list_orders call (next expectation: {:?})", other),
        }
    }

    async fn update_status(
        &self,
        token: &str,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        self.record(RecordedCall::UpdateStatus {
            token: token.to_string(),
            order_id: order_id.clone(),
            status,
        });
        match self.next() {
            Some(Expectation::UpdateStatus {
                order_id: expected_id,
                status: expected_status,
                reply,
            }) => {
                assert_eq!(&expected_id, order_id, "update_status order mismatch");
                assert_eq!(expected_status, status, "update_status status mismatch");
                reply.into_result()
            }
            other => panic!("Unexpected update_status call (next expectation: {:?})", other),
        }
    }
}

/// Builder for `list_orders` expectations.
pub struct ListExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ListExpectationBuilder {
    /// Replies with `success: true` and these orders, in backend order.
    pub fn return_ok(self, orders: Vec<Order>) {
        self.push(Reply::Ok(orders));
    }

    /// Replies with `success: false` and a message.
    pub fn return_rejected(self, message: impl Into<String>) {
        self.push(Reply::Rejected(Some(message.into())));
    }

    /// Replies with `success: false` and no message.
    pub fn return_rejected_silently(self) {
        self.push(Reply::Rejected(None));
    }

    /// Fails the way a broken transport or garbled body would.
    pub fn return_failure(self, reason: impl Into<String>) {
        self.push(Reply::Failure(reason.into()));
    }

    fn push(self, reply: Reply<Vec<Order>>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List(reply));
    }
}

/// Builder for `update_status` expectations.
pub struct UpdateStatusExpectationBuilder {
    order_id: OrderId,
    status: OrderStatus,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl UpdateStatusExpectationBuilder {
    pub fn return_ok(self) {
        self.push(Reply::Ok(()));
    }

    pub fn return_rejected(self, message: impl Into<String>) {
        self.push(Reply::Rejected(Some(message.into())));
    }

    pub fn return_failure(self, reason: impl Into<String>) {
        self.push(Reply::Failure(reason.into()));
    }

    fn push(self, reply: Reply<()>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::UpdateStatus {
                order_id: self.order_id,
                status: self.status,
                reply,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_replays_expectations_in_order() {
        let mock = MockOrderApi::new();
        mock.expect_list().return_ok(vec![]);
        mock.expect_update_status("o1", OrderStatus::Packing).return_ok();

        assert!(mock.list_orders("t").await.unwrap().is_empty());
        mock.update_status("t", &"o1".into(), OrderStatus::Packing)
            .await
            .unwrap();

        assert_eq!(
            mock.calls(),
            vec![
                RecordedCall::List { token: "t".into() },
                RecordedCall::UpdateStatus {
                    token: "t".into(),
                    order_id: "o1".into(),
                    status: OrderStatus::Packing,
                },
            ]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_failure_is_not_a_rejection() {
        let mock = MockOrderApi::new();
        mock.expect_list().return_failure("connection reset");

        let err = mock.list_orders("t").await.unwrap_err();
        assert!(!err.is_rejection());
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_leftovers() {
        let mock = MockOrderApi::new();
        mock.expect_list().return_ok(vec![]);
        mock.verify();
    }
}
