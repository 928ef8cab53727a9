//! Per-card selection state: the product chosen for the detail view plus
//! its visibility flag.
//!
//! Each card owns exactly one [`SelectionState`]. The detail view never holds
//! a reference to it mutably; it requests visibility changes through the
//! setter returned by [`SelectionState::open_setter`].

use storefront_core::ProductRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: Option<ProductRecord>,
    open: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected product, if the card has ever been activated
    pub fn selected(&self) -> Option<&ProductRecord> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Replace the selected product. Visibility is left untouched.
    pub fn select(&mut self, product: ProductRecord) {
        self.selected = Some(product);
    }

    /// Flip visibility. The selected product is kept across closes.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Setter handed to the detail view so it can request a visibility change
    /// without owning the flag.
    pub fn open_setter(&mut self) -> impl FnMut(bool) + '_ {
        move |open| self.open = open
    }
}
