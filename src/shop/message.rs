//! # Shop Messages
//!
//! Requests sent from a [`ShopClient`](crate::shop::ShopClient) to the
//! [`ShopActor`](crate::shop::ShopActor). Each carries a oneshot sender for
//! the reply.

use crate::model::{CartItems, Product, ProductId};
use crate::shop::ShopError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, ShopError>>;

#[derive(Debug)]
pub enum ShopRequest {
    UpdateQuantity {
        product_id: ProductId,
        size: String,
        quantity: u32,
        respond_to: Response<()>,
    },
    AddToCart {
        product_id: ProductId,
        size: String,
        respond_to: Response<u32>,
    },
    CartItems {
        respond_to: Response<CartItems>,
    },
    CartCount {
        respond_to: Response<u32>,
    },
    Products {
        respond_to: Response<Vec<Product>>,
    },
    SetProducts {
        products: Vec<Product>,
        respond_to: Response<()>,
    },
}
