//! Headless mode - NDJSON catalog output
//!
//! Loads the configured catalog through the same TEA loop as the TUI and
//! writes one JSON event per line to stdout, for scripts and tests.
//!
//! # Example Output
//!
//! ```json
//! {"event":"catalog_loaded","catalog":"sample catalog","product_count":2,"timestamp":1704700001000}
//! {"event":"product","id":652,"name":"Iphone 17 pro max","price":113000.0,"special_price":92499.99,"discount":10.0,"available":true,"timestamp":1704700001000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use storefront_app::{AppState, ListBranch};
use storefront_core::{ProductId, ProductRecord};
use tracing::error;

pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Catalog finished loading
    CatalogLoaded {
        catalog: String,
        product_count: usize,
        timestamp: i64,
    },

    /// One product, in catalog order
    Product {
        id: ProductId,
        name: String,
        price: f64,
        special_price: Option<f64>,
        discount: Option<f64>,
        available: bool,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn catalog_loaded(catalog: &str, product_count: usize) -> Self {
        Self::CatalogLoaded {
            catalog: catalog.to_string(),
            product_count,
            timestamp: Self::now(),
        }
    }

    pub fn product(product: &ProductRecord) -> Self {
        Self::Product {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            special_price: product.price_display().special(),
            discount: product.discount,
            available: product.is_available(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

/// Events describing the product list once loading has settled
pub fn events_for_state(state: &AppState) -> Vec<HeadlessEvent> {
    match state.list_branch() {
        ListBranch::Loading => Vec::new(),
        ListBranch::Error(message) => vec![HeadlessEvent::error(message.to_string(), true)],
        ListBranch::Ready(products) => {
            let mut events = Vec::with_capacity(products.len() + 1);
            events.push(HeadlessEvent::catalog_loaded(
                &state.catalog_name,
                products.len(),
            ));
            events.extend(products.iter().map(HeadlessEvent::product));
            events
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_app::services::sample_products;
    use storefront_app::ProductsAction;

    #[test]
    fn test_event_tag_is_snake_case() {
        let json = serde_json::to_value(HeadlessEvent::catalog_loaded("shop.json", 3)).unwrap();
        assert_eq!(json["event"], "catalog_loaded");
        assert_eq!(json["catalog"], "shop.json");
        assert_eq!(json["product_count"], 3);
    }

    #[test]
    fn test_product_event_fields() {
        let product = &sample_products()[1];
        let json = serde_json::to_value(HeadlessEvent::product(product)).unwrap();

        assert_eq!(json["event"], "product");
        assert_eq!(json["id"], 654);
        assert_eq!(json["special_price"], 199000.0);
        assert_eq!(json["available"], false);
    }

    #[test]
    fn test_falsy_special_price_is_null() {
        let product = ProductRecord::new(1, "Mug")
            .with_price(250.0)
            .with_special_price(0.0);
        let json = serde_json::to_value(HeadlessEvent::product(&product)).unwrap();
        assert!(json["special_price"].is_null());
    }

    #[test]
    fn test_events_for_loaded_state() {
        let mut state = AppState::new();
        state.catalog_name = "sample catalog".to_string();
        state.dispatch(ProductsAction::FetchSucceeded(sample_products()));

        let events = events_for_state(&state);

        assert_eq!(events.len(), 3);
        assert!(matches!(
            &events[0],
            HeadlessEvent::CatalogLoaded { product_count: 2, .. }
        ));
        assert!(matches!(&events[1], HeadlessEvent::Product { id: 652, .. }));
        assert!(matches!(&events[2], HeadlessEvent::Product { id: 654, .. }));
    }

    #[test]
    fn test_events_for_failed_state() {
        let mut state = AppState::new();
        state.dispatch(ProductsAction::FetchFailed("boom".to_string()));

        let events = events_for_state(&state);

        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            HeadlessEvent::Error { message, fatal: true, .. } if message == "boom"
        ));
    }

    #[test]
    fn test_no_events_while_loading() {
        let mut state = AppState::new();
        state.dispatch(ProductsAction::FetchStarted);
        assert!(events_for_state(&state).is_empty());
    }
}
