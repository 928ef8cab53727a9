//! Message types for the application (TEA pattern)

use crate::card::ActivationTarget;
use crate::input_key::InputKey;
use crate::services::CartOutcome;
use storefront_core::ProductRecord;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Grid Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus one card back in reading order
    FocusLeft,
    /// Move focus one card forward in reading order
    FocusRight,
    /// Move focus one grid row up
    FocusUp,
    /// Move focus one grid row down
    FocusDown,
    FocusFirst,
    FocusLast,

    // ─────────────────────────────────────────────────────────
    // Card Messages
    // ─────────────────────────────────────────────────────────
    /// Image or title of a card was activated
    ActivateCard {
        index: usize,
        target: ActivationTarget,
    },
    /// Close control of the open detail view
    CloseDetail,
    /// Cart control of a card
    AddToCart { index: usize },
    /// Cart service accepted the request
    CartCompleted {
        product_name: String,
        outcome: CartOutcome,
    },
    /// Cart service rejected the request
    CartFailed { product_name: String, error: String },
    /// Clear the status line
    DismissNotice,

    // ─────────────────────────────────────────────────────────
    // Catalog Messages
    // ─────────────────────────────────────────────────────────
    /// Start (or restart) loading the catalog
    LoadCatalog,
    /// Catalog source returned products
    CatalogLoaded { products: Vec<ProductRecord> },
    /// Catalog source failed
    CatalogLoadFailed { error: String },
}
