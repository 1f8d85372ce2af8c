//! # Mock Shop
//!
//! Utilities for testing code that holds a [`ShopClient`] without spawning
//! the real [`ShopActor`](crate::shop::ShopActor).
//!
//! [`create_mock_shop`] returns a client plus the receiving end of its
//! request channel. The test plays the actor: it pulls requests with the
//! `expect_*` helpers and answers through the returned responder.

use crate::model::{CartItems, Product, ProductId};
use crate::shop::{ShopClient, ShopError, ShopRequest};
use tokio::sync::{mpsc, oneshot, watch};

/// Creates a client whose requests land in the returned receiver.
///
/// Nothing is ever published to the client's change subscription.
pub fn create_mock_shop(buffer_size: usize) -> (ShopClient, mpsc::Receiver<ShopRequest>) {
    let (client, receiver, _changes) = create_mock_shop_with_changes(buffer_size);
    (client, receiver)
}

/// Like [`create_mock_shop`], also returning the sender that drives subscriptions.
pub fn create_mock_shop_with_changes(
    buffer_size: usize,
) -> (
    ShopClient,
    mpsc::Receiver<ShopRequest>,
    watch::Sender<CartItems>,
) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (changes, watcher) = watch::channel(CartItems::new());
    (ShopClient::new(sender, watcher), receiver, changes)
}

/// Helper to verify that the next message is an UpdateQuantity request
pub async fn expect_update_quantity(
    receiver: &mut mpsc::Receiver<ShopRequest>,
) -> Option<(
    ProductId,
    String,
    u32,
    oneshot::Sender<Result<(), ShopError>>,
)> {
    match receiver.recv().await {
        Some(ShopRequest::UpdateQuantity {
            product_id,
            size,
            quantity,
            respond_to,
        }) => Some((product_id, size, quantity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a CartItems request
pub async fn expect_cart_items(
    receiver: &mut mpsc::Receiver<ShopRequest>,
) -> Option<oneshot::Sender<Result<CartItems, ShopError>>> {
    match receiver.recv().await {
        Some(ShopRequest::CartItems { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Products request
pub async fn expect_products(
    receiver: &mut mpsc::Receiver<ShopRequest>,
) -> Option<oneshot::Sender<Result<Vec<Product>, ShopError>>> {
    match receiver.recv().await {
        Some(ShopRequest::Products { respond_to }) => Some(respond_to),
        _ => None,
    }
}
