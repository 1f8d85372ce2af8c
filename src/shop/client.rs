//! # Shop Client
//!
//! The cart-state handle injected into views. It is cheap to clone and can be
//! shared across tasks; all clones talk to the same [`ShopActor`](crate::shop::ShopActor).
use crate::model::{CartItems, Product, ProductId};
use crate::shop::{ShopError, ShopRequest};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ShopClient {
    sender: mpsc::Sender<ShopRequest>,
    changes: watch::Receiver<CartItems>,
}

impl ShopClient {
    pub fn new(sender: mpsc::Sender<ShopRequest>, changes: watch::Receiver<CartItems>) -> Self {
        Self { sender, changes }
    }

    /// Sets the quantity of one `(product, size)` entry. `0` removes the line.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        product_id: ProductId,
        size: String,
        quantity: u32,
    ) -> Result<(), ShopError> {
        debug!("Sending request");
        self.request(|respond_to| ShopRequest::UpdateQuantity {
            product_id,
            size,
            quantity,
            respond_to,
        })
        .await
    }

    /// Adds one unit of a product in the given size and returns the new quantity.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, product_id: ProductId, size: String) -> Result<u32, ShopError> {
        debug!("Sending request");
        self.request(|respond_to| ShopRequest::AddToCart {
            product_id,
            size,
            respond_to,
        })
        .await
    }

    pub async fn cart_items(&self) -> Result<CartItems, ShopError> {
        self.request(|respond_to| ShopRequest::CartItems { respond_to })
            .await
    }

    pub async fn cart_count(&self) -> Result<u32, ShopError> {
        self.request(|respond_to| ShopRequest::CartCount { respond_to })
            .await
    }

    pub async fn products(&self) -> Result<Vec<Product>, ShopError> {
        self.request(|respond_to| ShopRequest::Products { respond_to })
            .await
    }

    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn set_products(&self, products: Vec<Product>) -> Result<(), ShopError> {
        self.request(|respond_to| ShopRequest::SetProducts {
            products,
            respond_to,
        })
        .await
    }

    /// A receiver that observes every published cart mapping.
    pub fn subscribe(&self) -> watch::Receiver<CartItems> {
        self.changes.clone()
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, ShopError>>) -> ShopRequest,
    ) -> Result<T, ShopError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ShopError::ActorClosed)?;
        response.await.map_err(|_| ShopError::ActorDropped)?
    }
}
