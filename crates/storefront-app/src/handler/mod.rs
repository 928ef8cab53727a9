//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `card`: Card activation, detail close, add-to-cart, grid focus
//! - `catalog`: Catalog loading lifecycle

pub(crate) mod card;
pub(crate) mod catalog;
pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use storefront_core::ProductRecord;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Load products from the configured catalog source in the background
    LoadCatalog,

    /// Hand a product to the cart service
    AddToCart { product: ProductRecord },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
