//! # Customer Cart View
//!
//! Shows the non-zero lines of the shared cart, enriched with catalog data,
//! plus the totals panel and the checkout button.
//!
//! The view never writes its own copy of the cart. Edits go to the
//! [`ShopClient`]; the actor publishes the new mapping and the view
//! re-derives its lines from it on the next [`CartView::sync`] or
//! [`CartView::wait_for_change`].
use crate::config::StorefrontConfig;
use crate::model::{CartItems, CartLine, Product, ProductId};
use crate::router::{Navigator, Route};
use crate::shop::{ShopClient, ShopError};
use std::fmt::{self, Display};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// A cart line points at a product that is not in the catalog.
    #[error("Unknown product in cart: {0}")]
    UnknownProduct(ProductId),

    #[error(transparent)]
    Shop(#[from] ShopError),
}

/// What a quantity-field edit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityEdit {
    /// The input was empty, zero or not a positive integer.
    Ignored,
    /// The quantity was forwarded to the shop.
    Applied(u32),
}

/// A cart line joined with its catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub line: CartLine,
    pub name: String,
    pub image: Option<String>,
    pub unit_price: f64,
    /// Unit price with the currency symbol.
    pub price: String,
}

/// Summary shown under the cart lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub shipping_fee: f64,
    pub total: f64,
}

/// The whole cart page, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct CartPage {
    pub rows: Vec<CartRow>,
    pub totals: CartTotals,
    pub currency: String,
}

pub struct CartView {
    shop: ShopClient,
    navigator: Arc<dyn Navigator>,
    config: StorefrontConfig,
    changes: watch::Receiver<CartItems>,
    products: Vec<Product>,
    lines: Vec<CartLine>,
}

impl CartView {
    /// Builds the view from the shop's current cart and catalog.
    pub async fn new(
        shop: ShopClient,
        navigator: Arc<dyn Navigator>,
        config: StorefrontConfig,
    ) -> Result<Self, CartError> {
        let mut changes = shop.subscribe();
        changes.mark_unchanged();
        let items = shop.cart_items().await?;
        let products = shop.products().await?;
        Ok(Self {
            lines: items.lines(),
            shop,
            navigator,
            config,
            changes,
            products,
        })
    }

    /// Current non-zero lines, in cart order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Re-derives the lines if the cart changed since the last derivation.
    ///
    /// Returns whether anything was re-derived.
    pub fn sync(&mut self) -> bool {
        if !self.changes.has_changed().unwrap_or(false) {
            return false;
        }
        self.lines = self.changes.borrow_and_update().lines();
        debug!(lines = self.lines.len(), "Cart re-derived");
        true
    }

    /// Waits for the next cart change, then re-derives.
    pub async fn wait_for_change(&mut self) -> Result<(), CartError> {
        self.changes
            .changed()
            .await
            .map_err(|_| ShopError::ActorClosed)?;
        self.lines = self.changes.borrow_and_update().lines();
        Ok(())
    }

    /// Fetches the catalog again from the shop.
    pub async fn reload_products(&mut self) -> Result<(), CartError> {
        self.products = self.shop.products().await?;
        Ok(())
    }

    /// Applies a value typed into a line's quantity field.
    ///
    /// Only positive integers are forwarded. An empty field or `0` does
    /// nothing; removing a line is [`CartView::remove`]'s job.
    #[instrument(skip(self, line), fields(product_id = %line.product_id, size = %line.size))]
    pub async fn edit_quantity(
        &self,
        line: &CartLine,
        input: &str,
    ) -> Result<QuantityEdit, CartError> {
        let quantity = match input.trim().parse::<u32>() {
            Ok(quantity) if quantity > 0 => quantity,
            _ => {
                debug!(input, "Quantity edit ignored");
                return Ok(QuantityEdit::Ignored);
            }
        };
        self.shop
            .update_quantity(line.product_id.clone(), line.size.clone(), quantity)
            .await?;
        Ok(QuantityEdit::Applied(quantity))
    }

    /// The bin control: sets the line's quantity to exactly 0.
    #[instrument(skip(self, line), fields(product_id = %line.product_id, size = %line.size))]
    pub async fn remove(&self, line: &CartLine) -> Result<(), CartError> {
        info!("Removing cart line");
        self.shop
            .update_quantity(line.product_id.clone(), line.size.clone(), 0)
            .await?;
        Ok(())
    }

    /// Hands over to the order placement flow.
    pub fn proceed_to_checkout(&self) {
        self.navigator.navigate(Route::PlaceOrder);
    }

    /// Lines joined with catalog data.
    pub fn rows(&self) -> Result<Vec<CartRow>, CartError> {
        self.lines
            .iter()
            .map(|line| {
                let product = self
                    .product(&line.product_id)
                    .ok_or_else(|| CartError::UnknownProduct(line.product_id.clone()))?;
                Ok(CartRow {
                    line: line.clone(),
                    name: product.name.clone(),
                    image: product.thumbnail().map(str::to_string),
                    unit_price: product.price,
                    price: self.config.price(product.price),
                })
            })
            .collect()
    }

    /// Subtotal over lines whose product is known, plus the delivery fee.
    /// An empty cart totals zero.
    pub fn totals(&self) -> CartTotals {
        let subtotal: f64 = self
            .lines
            .iter()
            .filter_map(|line| {
                self.product(&line.product_id)
                    .map(|p| p.price * f64::from(line.quantity))
            })
            .sum();
        let shipping_fee = self.config.delivery_fee;
        let total = if subtotal == 0.0 {
            0.0
        } else {
            subtotal + shipping_fee
        };
        CartTotals {
            subtotal,
            shipping_fee,
            total,
        }
    }

    pub fn render(&self) -> Result<CartPage, CartError> {
        Ok(CartPage {
            rows: self.rows()?,
            totals: self.totals(),
            currency: self.config.currency.clone(),
        })
    }

    fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}

impl Display for CartPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "YOUR CART")?;
        for row in &self.rows {
            writeln!(
                f,
                "  {} ({}) {} x{}",
                row.name, row.line.size, row.price, row.line.quantity
            )?;
        }
        writeln!(f, "CART TOTALS")?;
        writeln!(f, "  Subtotal: {}{:.2}", self.currency, self.totals.subtotal)?;
        writeln!(f, "  Shipping Fee: {}{:.2}", self.currency, self.totals.shipping_fee)?;
        writeln!(f, "  Total: {}{:.2}", self.currency, self.totals.total)?;
        writeln!(f, "PROCEED TO CHECKOUT")
    }
}
