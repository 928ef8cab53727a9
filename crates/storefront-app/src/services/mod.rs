//! Service layer for Storefront
//!
//! The UI depends on these capabilities abstractly so that concrete
//! implementations can be substituted without touching presentation code.
//!
//! ## Key Components
//!
//! - [`CatalogSource`]: Produces the product records for the list
//! - [`CartService`]: Receives add-to-cart requests from product cards
//! - [`Services`]: The bundle handed to the action dispatcher

mod cart;
mod catalog;

use std::sync::Arc;

use crate::config::CartKind;

pub use cart::{CartLine, CartOutcome, CartService, InMemoryCart, UnimplementedCart};
#[cfg(test)]
pub use cart::MockCartService;
pub use catalog::{
    parse_catalog, sample_products, CatalogSource, ConfiguredCatalog, FileCatalog,
    LocalCatalogSource, SampleCatalog,
};

/// Capabilities used by the action dispatcher
#[derive(Clone)]
pub struct Services {
    pub catalog: ConfiguredCatalog,
    pub cart: Arc<dyn CartService>,
}

impl Services {
    pub fn new(catalog: ConfiguredCatalog, cart: Arc<dyn CartService>) -> Self {
        Self { catalog, cart }
    }
}

/// Build the cart selected by settings or the command line
pub fn cart_for_kind(kind: CartKind) -> Arc<dyn CartService> {
    match kind {
        CartKind::Unimplemented => Arc::new(UnimplementedCart),
        CartKind::Memory => Arc::new(InMemoryCart::new()),
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new(ConfiguredCatalog::default(), Arc::new(UnimplementedCart))
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}
