//! # Shop State
//!
//! The shared shop context (product catalog plus cart mapping) lives in a
//! single actor task. Views never reach for ambient state: they are handed a
//! [`ShopClient`] and talk to the actor through it.
//!
//! ## Usage
//!
//! ```rust
//! use storefront::model::Product;
//! use storefront::shop;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = shop::new(vec![Product::new("p1", "Tee", 20.0, vec![])]);
//!     let handle = tokio::spawn(actor.run());
//!
//!     client.add_to_cart("p1".into(), "M".to_string()).await?;
//!     client.update_quantity("p1".into(), "M".to_string(), 3).await?;
//!     assert_eq!(client.cart_count().await?, 3);
//!
//!     drop(client);
//!     handle.await?;
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ShopActor;
pub use client::ShopClient;
pub use error::*;
pub use message::{Response, ShopRequest};

use crate::model::Product;

/// Creates a new shop actor seeded with a catalog, and its client.
pub fn new(products: Vec<Product>) -> (ShopActor, ShopClient) {
    ShopActor::new(32, products)
}
