//! Catalog loading lifecycle handlers

use storefront_core::ProductRecord;
use tracing::{info, warn};

use crate::state::AppState;
use crate::store::ProductsAction;

use super::{UpdateAction, UpdateResult};

/// Enter the loading branch and ask the event loop to fetch products
pub fn handle_load_catalog(state: &mut AppState) -> UpdateResult {
    if state.products().is_loading {
        return UpdateResult::none();
    }
    info!("Loading catalog from {}", state.catalog_name);
    state.dispatch(ProductsAction::FetchStarted);
    UpdateResult::action(UpdateAction::LoadCatalog)
}

pub fn handle_catalog_loaded(state: &mut AppState, products: Vec<ProductRecord>) -> UpdateResult {
    info!("Catalog loaded: {} products", products.len());
    state.dispatch(ProductsAction::FetchSucceeded(products));
    UpdateResult::none()
}

pub fn handle_catalog_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Catalog load failed: {}", error);
    state.dispatch(ProductsAction::FetchFailed(error));
    UpdateResult::none()
}
