//! Error types for the shop actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur while reading or mutating the shared cart state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    /// The actor task is gone; no request can be delivered.
    #[error("Shop actor closed")]
    ActorClosed,

    /// The actor dropped the response channel before answering.
    #[error("Shop actor dropped response channel")]
    ActorDropped,

    /// A product was added to the cart without choosing a size.
    #[error("Select a size for product {0}")]
    SizeRequired(ProductId),
}
