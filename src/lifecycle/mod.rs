//! # Storefront Lifecycle
//!
//! Starts the shop actor, builds the HTTP order client from configuration and
//! hands out views wired to them. [`Storefront::shutdown`] closes the shop
//! channel and waits for the actor task to finish.
//!
//! ```rust,no_run
//! use storefront::config::StorefrontConfig;
//! use storefront::lifecycle::Storefront;
//! use storefront::router::TracingNavigator;
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<(), String> {
//! let storefront = Storefront::new(StorefrontConfig::default(), vec![]);
//! let cart = storefront
//!     .cart_view(Arc::new(TracingNavigator))
//!     .await
//!     .map_err(|e| e.to_string())?;
//! println!("{}", cart.render().map_err(|e| e.to_string())?);
//! drop(cart);
//! storefront.shutdown().await?;
//! # Ok(())
//! # }
//! ```

mod storefront;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use storefront::Storefront;
