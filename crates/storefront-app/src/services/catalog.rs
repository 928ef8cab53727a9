//! Catalog sources.
//!
//! A catalog source produces the full list of product records. Loading runs
//! off the UI loop; the result comes back as a message and is fed to the
//! products reducer.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use storefront_core::prelude::*;
use storefront_core::ProductRecord;

/// Produces product records
#[trait_variant::make(CatalogSource: Send)]
pub trait LocalCatalogSource {
    /// Human-readable origin, shown in the header
    fn describe(&self) -> String;

    /// Load every product, in display order
    async fn load(&self) -> Result<Vec<ProductRecord>>;
}

/// The built-in sample products
pub fn sample_products() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new(652, "Iphone 17 pro max")
            .with_image(
                "https://store.storeimages.cdn-apple.com/1/as-images.apple.com/is/\
                 iphone-17-pro-finish-select-202509-6-9inch-cosmicorange?wid=5120&hei=2880&fmt=webp",
            )
            .with_description(
                "Experience the latest in mobile technology with advanced cameras, \
                 powerful processing, and an all-day battery.",
            )
            .with_quantity(10)
            .with_price(113000.0)
            .with_discount(10.0)
            .with_special_price(92499.99),
        ProductRecord::new(654, "MacBook Pro M5s")
            .with_image(
                "https://store.storeimages.cdn-apple.com/1/as-images.apple.com/is/\
                 mac-macbook-pro-size-unselect-202601-gallery-1?wid=5120&hei=3280&fmt=webp",
            )
            .with_description(
                "Ultra-thin laptop with Apple's M2 chip, providing fast performance \
                 in a lightweight, portable design.",
            )
            .with_quantity(0)
            .with_price(255000.0)
            .with_discount(20.0)
            .with_special_price(199000.0),
    ]
}

/// Static in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct SampleCatalog;

impl CatalogSource for SampleCatalog {
    fn describe(&self) -> String {
        "sample catalog".to_string()
    }

    async fn load(&self) -> Result<Vec<ProductRecord>> {
        Ok(sample_products())
    }
}

/// Catalog read from a JSON or TOML file
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<ProductRecord>> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Err(Error::catalog_not_found(&self.path));
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog {}", self.path.display()))?;
        let products = parse_catalog(&self.path, &content)?;
        info!(
            "Loaded {} products from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }
}

/// Catalog chosen from CLI flags or settings
#[derive(Debug, Clone)]
pub enum ConfiguredCatalog {
    Sample(SampleCatalog),
    File(FileCatalog),
}

impl ConfiguredCatalog {
    /// A file catalog when a path is given, otherwise the sample catalog
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ConfiguredCatalog::File(FileCatalog::new(path)),
            None => ConfiguredCatalog::Sample(SampleCatalog),
        }
    }
}

impl Default for ConfiguredCatalog {
    fn default() -> Self {
        ConfiguredCatalog::Sample(SampleCatalog)
    }
}

impl CatalogSource for ConfiguredCatalog {
    fn describe(&self) -> String {
        match self {
            ConfiguredCatalog::Sample(c) => CatalogSource::describe(c),
            ConfiguredCatalog::File(c) => CatalogSource::describe(c),
        }
    }

    async fn load(&self) -> Result<Vec<ProductRecord>> {
        match self {
            ConfiguredCatalog::Sample(c) => CatalogSource::load(c).await,
            ConfiguredCatalog::File(c) => CatalogSource::load(c).await,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File formats
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<ProductRecord>),
    Wrapped { products: Vec<ProductRecord> },
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    products: Vec<ProductRecord>,
}

/// Parse catalog text, choosing the format from the file extension.
///
/// JSON may be a bare array or `{"products": [...]}`; TOML uses
/// `[[products]]` tables.
pub fn parse_catalog(path: &Path, content: &str) -> Result<Vec<ProductRecord>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let products = match extension.as_deref() {
        Some("json") => match serde_json::from_str::<JsonCatalog>(content)? {
            JsonCatalog::List(products) | JsonCatalog::Wrapped { products } => products,
        },
        Some("toml") => toml::from_str::<TomlCatalog>(content)?.products,
        _ => return Err(Error::unsupported_catalog_format(path)),
    };

    warn_duplicate_ids(&products);
    Ok(products)
}

fn warn_duplicate_ids(products: &[ProductRecord]) {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            warn!("Duplicate product id {} in catalog", product.id);
        }
    }
}
