//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by
//! `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Quantity edits, watch publishes and request bodies
//! RUST_LOG=debug cargo run
//!
//! # Only the HTTP client
//! RUST_LOG=storefront::api=debug cargo run
//! ```
//!
//! Views open a span per user action, so a status change reads as:
//!
//! ```text
//! DEBUG status_handler{order_id=o1 status=Shipped}: Status applied locally previous=Some(Packing)
//! INFO status_handler{order_id=o1 status=Shipped}:fetch_all_orders: Orders loaded count=3
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
