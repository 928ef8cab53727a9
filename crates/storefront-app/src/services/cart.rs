//! Add-to-cart capability.
//!
//! Product cards only ever talk to [`CartService`]. The default
//! [`UnimplementedCart`] accepts every request and reports that carts are
//! not wired up yet; [`InMemoryCart`] is a working implementation for hosts
//! that want one.

use std::sync::Mutex;

use storefront_core::prelude::*;
use storefront_core::{PriceDisplay, ProductId, ProductRecord};

/// What happened to an add-to-cart request
#[derive(Debug, Clone, PartialEq)]
pub enum CartOutcome {
    Added {
        product_id: ProductId,
        line_count: usize,
        total: f64,
    },
    /// The cart capability is a stub
    NotImplemented,
}

#[cfg_attr(test, mockall::automock)]
pub trait CartService: Send + Sync {
    fn add_to_cart(&self, product: &ProductRecord) -> Result<CartOutcome>;
}

/// Default cart: a no-op extension point
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedCart;

impl CartService for UnimplementedCart {
    fn add_to_cart(&self, product: &ProductRecord) -> Result<CartOutcome> {
        warn!(
            "Add to cart requested for product {} but no cart service is configured",
            product.id
        );
        Ok(CartOutcome::NotImplemented)
    }
}

/// One product in the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// Special price when present, otherwise the base price
    pub unit_price: f64,
    pub discount: Option<f64>,
}

/// Cart kept in process memory
///
/// Each product may appear once; adding it again is rejected, as is adding
/// a product with nothing in stock.
#[derive(Debug, Default)]
pub struct InMemoryCart {
    lines: Mutex<Vec<CartLine>>,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn total(&self) -> f64 {
        self.lines()
            .iter()
            .map(|l| l.unit_price * l.quantity as f64)
            .sum()
    }
}

impl CartService for InMemoryCart {
    fn add_to_cart(&self, product: &ProductRecord) -> Result<CartOutcome> {
        if !product.is_available() {
            return Err(Error::cart(format!("{} is not available", product.name)));
        }

        let mut lines = self
            .lines
            .lock()
            .map_err(|_| Error::cart("cart lock poisoned"))?;

        if lines.iter().any(|l| l.product_id == product.id) {
            return Err(Error::cart(format!(
                "Product {} already exists in the cart",
                product.name
            )));
        }

        let unit_price = match product.price_display() {
            PriceDisplay::Discounted { special, .. } => special,
            PriceDisplay::Plain { base } => base,
        };

        lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            quantity: 1,
            unit_price,
            discount: product.discount,
        });

        let total = lines
            .iter()
            .map(|l| l.unit_price * l.quantity as f64)
            .sum();
        debug!("Added product {} to cart ({} lines)", product.id, lines.len());

        Ok(CartOutcome::Added {
            product_id: product.id,
            line_count: lines.len(),
            total,
        })
    }
}
