//! # Storefront
//!
//! Client-side logic for a small clothing storefront: an admin page that
//! lists every order and moves it through its fulfillment stages, and a
//! customer cart page backed by a shared cart.
//!
//! ## Architecture Notes
//!
//! ### 1. Explicit collaborators
//! Nothing is ambient. The backend URL, currency and delivery fee live in a
//! [`StorefrontConfig`](config::StorefrontConfig); the backend is an
//! [`OrderApi`](api::OrderApi); notifications and navigation go through the
//! [`Notifier`](notify::Notifier) and [`Navigator`](router::Navigator)
//! traits. Views receive all of them at construction.
//!
//! ### 2. The cart is owned by an actor
//! The cart mapping and the catalog belong to a [`ShopActor`](shop::ShopActor)
//! running in its own Tokio task. Views talk to it through a cheap, cloneable
//! [`ShopClient`](shop::ShopClient) and observe changes on a `watch` channel.
//!
//! ### 3. Typed errors
//! Each concern has its own `thiserror` enum: [`ApiError`](api::ApiError),
//! [`ShopError`](shop::ShopError), [`CartError`](views::CartError) and
//! [`ConfigError`](config::ConfigError).
//!
//! ### 4. Observability
//! `tracing` is used throughout with structured fields. See
//! [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`model`]: wire and domain types (orders, products, cart mapping).
//! - [`api`]: the order backend contract, its HTTP client and a mock.
//! - [`shop`]: the shop actor, its client and test helpers.
//! - [`views`]: [`OrdersView`](views::OrdersView) and
//!   [`CartView`](views::CartView) with their render models.
//! - [`lifecycle`]: [`Storefront`](lifecycle::Storefront), which starts and
//!   stops everything.
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Also list orders from a running backend
//! STOREFRONT_ADMIN_TOKEN=... STOREFRONT_BACKEND_URL=http://localhost:4000 cargo run
//! ```

pub mod api;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod router;
pub mod shop;
pub mod views;
