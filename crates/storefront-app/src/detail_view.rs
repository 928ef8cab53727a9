//! Contract between a product card and its detail view.
//!
//! The detail view gets a read-only snapshot: the visibility flag, the
//! card's selected product (possibly absent), and an availability flag the
//! card computed. It can only ask for the modal to close, through a setter
//! supplied by the card.

use storefront_core::{PriceDisplay, ProductRecord};

/// Stock presentation in the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn from_available(is_available: bool) -> Self {
        if is_available {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out Of Stock",
        }
    }
}

/// Everything the detail view reads
#[derive(Debug, Clone, Copy)]
pub struct DetailViewProps<'a> {
    pub open: bool,
    pub product: Option<&'a ProductRecord>,
    /// Supplied by the card; the view does not recompute it
    pub is_available: bool,
}

impl<'a> DetailViewProps<'a> {
    pub fn new(open: bool, product: Option<&'a ProductRecord>, is_available: bool) -> Self {
        Self {
            open,
            product,
            is_available,
        }
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_available(self.is_available)
    }

    /// Price block, or `None` for an empty product
    pub fn price_display(&self) -> Option<PriceDisplay> {
        self.product.map(ProductRecord::price_display)
    }

    /// Product name, empty when no product was supplied
    pub fn title(&self) -> &'a str {
        self.product.map(|p| p.name.as_str()).unwrap_or_default()
    }

    /// Description, or `None` for an empty product or blank text
    pub fn description(&self) -> Option<&'a str> {
        self.product
            .map(|p| p.description.as_str())
            .filter(|d| !d.is_empty())
    }

    /// Image URI, or `None` when absent
    pub fn image(&self) -> Option<&'a str> {
        self.product
            .map(|p| p.image.as_str())
            .filter(|i| !i.is_empty())
    }

    /// Close control: asks the owner to hide the view
    pub fn on_close<F>(&self, set_open: &mut F)
    where
        F: FnMut(bool),
    {
        set_open(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_product_has_no_content() {
        let props = DetailViewProps::new(false, None, false);
        assert_eq!(props.title(), "");
        assert!(props.description().is_none());
        assert!(props.image().is_none());
        assert!(props.price_display().is_none());
    }

    #[test]
    fn test_on_close_calls_setter_once_with_false() {
        let product = ProductRecord::new(1, "Phone");
        let props = DetailViewProps::new(true, Some(&product), true);
        let mut calls = Vec::new();

        props.on_close(&mut |open| calls.push(open));

        assert_eq!(calls, vec![false]);
        assert_eq!(product.name, "Phone");
    }

    #[test]
    fn test_on_close_each_activation_calls_setter() {
        let props = DetailViewProps::new(true, None, false);
        let mut count = 0;
        let mut setter = |open: bool| {
            assert!(!open);
            count += 1;
        };

        props.on_close(&mut setter);
        props.on_close(&mut setter);

        assert_eq!(count, 2);
    }

    #[test]
    fn test_stock_status_uses_supplied_flag() {
        // Quantity says in stock, but the card said otherwise
        let product = ProductRecord::new(1, "Phone").with_quantity(5);
        let props = DetailViewProps::new(true, Some(&product), false);
        assert_eq!(props.stock_status(), StockStatus::OutOfStock);
        assert_eq!(props.stock_status().label(), "Out Of Stock");

        let props = DetailViewProps::new(true, Some(&product), true);
        assert_eq!(props.stock_status().label(), "In Stock");
    }

    #[test]
    fn test_price_display_follows_special_price() {
        let product = ProductRecord::new(1, "Phone")
            .with_price(100.0)
            .with_special_price(80.0);
        let props = DetailViewProps::new(true, Some(&product), true);
        assert_eq!(
            props.price_display(),
            Some(PriceDisplay::Discounted {
                base: 100.0,
                special: 80.0
            })
        );
    }
}
