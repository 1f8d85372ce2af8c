//! Cart state and its flat projection.
//!
//! The authoritative cart is a nested mapping `productId -> size -> quantity`
//! owned by the shop actor. Views never keep their own copy of it; they derive
//! a list of [`CartLine`]s from a snapshot every time the mapping changes.

use crate::model::ProductId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The nested cart mapping.
///
/// Entries keep insertion order, so deriving lines from an unchanged mapping
/// always yields the same sequence. A quantity of `0` is the deletion signal:
/// the key stays in the mapping but no line is derived from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItems(IndexMap<ProductId, IndexMap<String, u32>>);

impl CartItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from `(product, size, quantity)` triples, in order.
    pub fn from_entries<I, P, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, S, u32)>,
        P: Into<ProductId>,
        S: Into<String>,
    {
        let mut items = Self::new();
        for (product_id, size, quantity) in entries {
            items.set(product_id.into(), size.into(), quantity);
        }
        items
    }

    pub fn quantity(&self, product_id: &ProductId, size: &str) -> u32 {
        self.0
            .get(product_id)
            .and_then(|sizes| sizes.get(size))
            .copied()
            .unwrap_or(0)
    }

    /// Overwrites the quantity for one `(product, size)` entry.
    pub fn set(&mut self, product_id: ProductId, size: String, quantity: u32) {
        self.0.entry(product_id).or_default().insert(size, quantity);
    }

    /// Sum of all positive quantities, saturating at `u32::MAX`.
    pub fn count(&self) -> u32 {
        self.0
            .values()
            .flat_map(|sizes| sizes.values())
            .fold(0u32, |total, quantity| total.saturating_add(*quantity))
    }

    /// Flat list of non-zero lines, in mapping order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.0
            .iter()
            .flat_map(|(product_id, sizes)| {
                sizes
                    .iter()
                    .filter(|(_, quantity)| **quantity > 0)
                    .map(move |(size, quantity)| CartLine {
                        product_id: product_id.clone(),
                        size: size.clone(),
                        quantity: *quantity,
                    })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// One `(product, size, quantity)` tuple shown in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub size: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product_id: impl Into<ProductId>, size: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.into(),
            quantity,
        }
    }
}
