//! Product records and the values derived from them at render time.
//!
//! A [`ProductRecord`] is read-only from the UI's point of view. Availability
//! and the price block are recomputed from it on every render and never
//! stored.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Unique product identifier
pub type ProductId = u64;

/// Currency symbol used when none is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// One sellable item.
///
/// Catalog sources have historically used two naming conventions for the
/// same fields (`image` vs `productImage`, `specialPrice` vs `specialprice`).
/// Both are accepted on input; output always uses the canonical names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(default, alias = "productId")]
    pub id: ProductId,

    #[serde(default, alias = "productName")]
    pub name: String,

    /// Image URI
    #[serde(default, alias = "productImage")]
    pub image: String,

    #[serde(default, alias = "productDescription")]
    pub description: String,

    /// Units in stock; `None` when the source omitted it
    #[serde(
        default,
        alias = "productQuantity",
        deserialize_with = "deserialize_quantity"
    )]
    pub quantity: Option<u32>,

    /// Base price
    #[serde(default, alias = "productPrice")]
    pub price: f64,

    /// Discount percentage, informational only
    #[serde(default, alias = "productDiscount")]
    pub discount: Option<f64>,

    /// Discounted price; supersedes `price` for display when non-zero.
    /// Nothing checks that it is lower than `price`.
    #[serde(default, alias = "specialprice")]
    pub special_price: Option<f64>,
}

impl ProductRecord {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_special_price(mut self, special_price: f64) -> Self {
        self.special_price = Some(special_price);
        self
    }

    /// Whether the product can be added to a cart right now
    pub fn is_available(&self) -> bool {
        is_available(self.quantity)
    }

    /// Price block to show for this product
    pub fn price_display(&self) -> PriceDisplay {
        PriceDisplay::new(self.price, self.special_price)
    }
}

/// Availability rule: a quantity must be present and greater than zero.
pub fn is_available(quantity: Option<u32>) -> bool {
    matches!(quantity, Some(q) if q > 0)
}

// ─────────────────────────────────────────────────────────────────
// Price display
// ─────────────────────────────────────────────────────────────────

/// Which prices a product's price block shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceDisplay {
    /// Base price struck through next to the emphasized special price
    Discounted { base: f64, special: f64 },
    /// Base price only
    Plain { base: f64 },
}

impl PriceDisplay {
    /// A special price of zero, NaN, or `None` counts as "no discount".
    pub fn new(base: f64, special: Option<f64>) -> Self {
        match special.filter(|s| *s != 0.0 && !s.is_nan()) {
            Some(special) => PriceDisplay::Discounted { base, special },
            None => PriceDisplay::Plain { base },
        }
    }

    pub fn base(&self) -> f64 {
        match self {
            PriceDisplay::Discounted { base, .. } | PriceDisplay::Plain { base } => *base,
        }
    }

    pub fn special(&self) -> Option<f64> {
        match self {
            PriceDisplay::Discounted { special, .. } => Some(*special),
            PriceDisplay::Plain { .. } => None,
        }
    }

    pub fn is_discounted(&self) -> bool {
        matches!(self, PriceDisplay::Discounted { .. })
    }
}

/// Format an amount with two decimals, e.g. `₹92499.99`
pub fn format_price(currency_symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", currency_symbol, amount)
}

// ─────────────────────────────────────────────────────────────────
// Lenient quantity parsing
// ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawQuantity {
    fn into_quantity(self) -> Option<u32> {
        match self {
            RawQuantity::Int(n) => Some(n.clamp(0, u32::MAX as i64) as u32),
            RawQuantity::Float(f) => clamp_float(f),
            RawQuantity::Text(s) => s.trim().parse::<f64>().ok().and_then(clamp_float),
            RawQuantity::Other(_) => None,
        }
    }
}

fn clamp_float(f: f64) -> Option<u32> {
    if f.is_nan() {
        return None;
    }
    // Any positive amount stays in stock; `as` saturates and truncates
    if f > 0.0 && f < 1.0 {
        return Some(1);
    }
    Some(f.max(0.0) as u32)
}

/// Accepts integers, floats, and numeric strings; negatives clamp to zero
/// and unparseable strings or non-numeric values become `None`.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawQuantity>::deserialize(deserializer)?;
    Ok(raw.and_then(RawQuantity::into_quantity))
}
