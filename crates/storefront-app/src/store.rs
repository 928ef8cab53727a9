//! Application store holding the `products` slice.
//!
//! State changes go through a [`Reducer`]: given the current slice and an
//! action it returns the next slice. The store itself never edits the slice
//! in place, so a different reducer can be swapped in without touching the
//! UI code.

use std::fmt;
use std::sync::Arc;

use storefront_core::ProductRecord;
use tracing::debug;

/// The `products` slice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsState {
    pub products: Vec<ProductRecord>,
    pub is_loading: bool,
    /// Opaque text from the data layer; non-empty means "show the error banner"
    pub error_message: Option<String>,
}

impl ProductsState {
    /// Error text if there is any worth showing
    pub fn error(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Actions understood by the products slice
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsAction {
    FetchStarted,
    FetchSucceeded(Vec<ProductRecord>),
    FetchFailed(String),
}

/// State transition function for the products slice
pub trait Reducer: Send + Sync {
    fn reduce(&self, state: &ProductsState, action: ProductsAction) -> ProductsState;
}

impl<F> Reducer for F
where
    F: Fn(&ProductsState, ProductsAction) -> ProductsState + Send + Sync,
{
    fn reduce(&self, state: &ProductsState, action: ProductsAction) -> ProductsState {
        self(state, action)
    }
}

/// Default products reducer
///
/// - `FetchStarted` keeps the current products and clears the error
/// - `FetchSucceeded` replaces the products
/// - `FetchFailed` keeps the products and records the error
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductsReducer;

impl Reducer for ProductsReducer {
    fn reduce(&self, state: &ProductsState, action: ProductsAction) -> ProductsState {
        match action {
            ProductsAction::FetchStarted => ProductsState {
                products: state.products.clone(),
                is_loading: true,
                error_message: None,
            },
            ProductsAction::FetchSucceeded(products) => ProductsState {
                products,
                is_loading: false,
                error_message: None,
            },
            ProductsAction::FetchFailed(message) => ProductsState {
                products: state.products.clone(),
                is_loading: false,
                error_message: Some(message),
            },
        }
    }
}

/// Process-wide state container
#[derive(Clone)]
pub struct ApplicationStore {
    products: ProductsState,
    reducer: Arc<dyn Reducer>,
}

impl ApplicationStore {
    pub fn new() -> Self {
        Self::with_reducer(ProductsReducer)
    }

    pub fn with_reducer(reducer: impl Reducer + 'static) -> Self {
        Self {
            products: ProductsState::default(),
            reducer: Arc::new(reducer),
        }
    }

    /// Seed the slice, e.g. with a static catalog
    pub fn with_products(mut self, products: ProductsState) -> Self {
        self.products = products;
        self
    }

    pub fn products(&self) -> &ProductsState {
        &self.products
    }

    pub fn dispatch(&mut self, action: ProductsAction) {
        debug!("Dispatching {}", action_name(&action));
        self.products = self.reducer.reduce(&self.products, action);
    }
}

impl Default for ApplicationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ApplicationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationStore")
            .field("products", &self.products)
            .finish_non_exhaustive()
    }
}

fn action_name(action: &ProductsAction) -> String {
    match action {
        ProductsAction::FetchStarted => "FetchStarted".to_string(),
        ProductsAction::FetchSucceeded(products) => {
            format!("FetchSucceeded({} products)", products.len())
        }
        ProductsAction::FetchFailed(_) => "FetchFailed".to_string(),
    }
}
