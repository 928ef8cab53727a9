//! Product card state and interaction handlers.
//!
//! A card is built from one product record. It owns its [`SelectionState`];
//! nothing else in the application writes to it.

use storefront_core::{ProductId, ProductRecord};

use crate::selection::SelectionState;

/// Cart control label when the product is in stock
pub const ADD_TO_CART_LABEL: &str = "Add to cart";

/// Cart control label when the product is unavailable
pub const OUT_OF_STOCK_LABEL: &str = "Out of stock";

/// Part of the card the user activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationTarget {
    Image,
    Title,
}

/// Local UI state for one product card
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    product_id: ProductId,
    pub selection: SelectionState,
}

impl CardState {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            selection: SelectionState::new(),
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Image or title activation.
    ///
    /// Stores a composite of the card's inputs, keyed by the card's own
    /// product id, as the selection and flips visibility. Activating again
    /// while open closes the view.
    pub fn on_image_or_title_activate(&mut self, product: &ProductRecord) {
        let composite = ProductRecord {
            id: self.product_id,
            ..product.clone()
        };
        self.selection.select(composite);
        self.selection.toggle();
    }
}

/// Whether the cart control is enabled for a product
pub fn cart_control_enabled(product: &ProductRecord) -> bool {
    product.is_available()
}

/// Cart control label for a product
pub fn cart_control_label(product: &ProductRecord) -> &'static str {
    if product.is_available() {
        ADD_TO_CART_LABEL
    } else {
        OUT_OF_STOCK_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> ProductRecord {
        ProductRecord::new(652, "Iphone 17 pro max")
            .with_image("https://example.com/iphone.webp")
            .with_description("Advanced cameras")
            .with_quantity(10)
            .with_price(113000.0)
            .with_discount(10.0)
            .with_special_price(92499.99)
    }

    #[test]
    fn test_activate_selects_composite_and_opens() {
        let product = phone();
        let mut card = CardState::new(product.id);

        card.on_image_or_title_activate(&product);

        assert!(card.selection.is_open());
        let selected = card.selection.selected().expect("selected");
        assert_eq!(selected, &product);
        assert_eq!(selected.id, 652);
    }

    #[test]
    fn test_composite_id_comes_from_card() {
        let mut card = CardState::new(42);
        let product = ProductRecord::new(0, "Unnumbered");

        card.on_image_or_title_activate(&product);

        assert_eq!(card.selection.selected().map(|p| p.id), Some(42));
        assert_eq!(
            card.selection.selected().map(|p| p.name.as_str()),
            Some("Unnumbered")
        );
    }

    #[test]
    fn test_second_activation_closes() {
        let product = phone();
        let mut card = CardState::new(product.id);

        card.on_image_or_title_activate(&product);
        card.on_image_or_title_activate(&product);

        assert!(!card.selection.is_open());
        assert!(card.selection.selected().is_some());
    }

    #[test]
    fn test_cart_control_in_stock() {
        let product = phone();
        assert!(cart_control_enabled(&product));
        assert_eq!(cart_control_label(&product), "Add to cart");
    }

    #[test]
    fn test_cart_control_out_of_stock() {
        let zero = phone().with_quantity(0);
        assert!(!cart_control_enabled(&zero));
        assert_eq!(cart_control_label(&zero), "Out of stock");

        let mut absent = phone();
        absent.quantity = None;
        assert!(!cart_control_enabled(&absent));
        assert_eq!(cart_control_label(&absent), "Out of stock");
    }
}
