//! # Shop Actor
//!
//! The `ShopActor` owns the cart mapping and the product catalog. It processes
//! requests sequentially in its own Tokio task, so the cart never needs a lock
//! and concurrent `update_quantity` calls are applied one at a time.
//!
//! Every mutation of the cart is published on a `watch` channel. Views hold a
//! receiver and re-derive their lines whenever it changes.

use crate::model::{CartItems, Product};
use crate::shop::{ShopClient, ShopError, ShopRequest};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

pub struct ShopActor {
    receiver: mpsc::Receiver<ShopRequest>,
    cart: CartItems,
    products: Vec<Product>,
    changes: watch::Sender<CartItems>,
}

impl ShopActor {
    /// Creates a new `ShopActor` and its associated `ShopClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the request channel. If the channel is
    ///   full, client calls wait until there is space.
    /// * `products` - The initial catalog.
    pub fn new(buffer_size: usize, products: Vec<Product>) -> (Self, ShopClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (changes, watcher) = watch::channel(CartItems::new());
        let actor = Self {
            receiver,
            cart: CartItems::new(),
            products,
            changes,
        };
        (actor, ShopClient::new(sender, watcher))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(products = self.products.len(), "Shop actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ShopRequest::UpdateQuantity {
                    product_id,
                    size,
                    quantity,
                    respond_to,
                } => {
                    debug!(%product_id, %size, quantity, "UpdateQuantity");
                    self.cart.set(product_id, size, quantity);
                    self.publish();
                    let _ = respond_to.send(Ok(()));
                }
                ShopRequest::AddToCart {
                    product_id,
                    size,
                    respond_to,
                } => {
                    if size.is_empty() {
                        warn!(%product_id, "AddToCart without size");
                        let _ = respond_to.send(Err(ShopError::SizeRequired(product_id)));
                        continue;
                    }
                    let quantity = self.cart.quantity(&product_id, &size).saturating_add(1);
                    debug!(%product_id, %size, quantity, "AddToCart");
                    self.cart.set(product_id, size, quantity);
                    self.publish();
                    let _ = respond_to.send(Ok(quantity));
                }
                ShopRequest::CartItems { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.clone()));
                }
                ShopRequest::CartCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.count()));
                }
                ShopRequest::Products { respond_to } => {
                    let _ = respond_to.send(Ok(self.products.clone()));
                }
                ShopRequest::SetProducts {
                    products,
                    respond_to,
                } => {
                    info!(count = products.len(), "Catalog replaced");
                    self.products = products;
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(items = self.cart.count(), "Shutdown");
    }

    fn publish(&self) {
        self.changes.send_replace(self.cart.clone());
    }
}
