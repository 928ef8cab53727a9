//! Product list branch selection.
//!
//! The list shows exactly one of three things: a loading indicator, an
//! error banner, or one card per product in order. Loading wins over an
//! error, and an error wins over the products.

use storefront_core::ProductRecord;

use crate::store::ProductsState;

/// Loading indicator text
pub const LOADING_TEXT: &str = "Loading....";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListBranch<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a [ProductRecord]),
}

impl<'a> ListBranch<'a> {
    pub fn from_state(state: &'a ProductsState) -> Self {
        if state.is_loading {
            ListBranch::Loading
        } else if let Some(message) = state.error() {
            ListBranch::Error(message)
        } else {
            ListBranch::Ready(&state.products)
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ListBranch::Ready(_))
    }
}

/// Number of grid columns for a given width, mirroring the
/// 1 / 2 / 3 / 4 column breakpoints of the storefront grid.
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=119 => 2,
        120..=179 => 3,
        _ => 4,
    }
}
