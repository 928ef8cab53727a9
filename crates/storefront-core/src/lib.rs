//! # storefront-core - Core Domain Types
//!
//! Foundation crate for Storefront. Provides the product record, the values
//! derived from it at render time, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Products (`product`)
//! - [`ProductRecord`] - One sellable item, tolerant of both field-naming conventions
//! - [`is_available()`] - Quantity present and greater than zero
//! - [`PriceDisplay`] - Discounted vs plain price block
//! - [`format_price()`] - Two-decimal price with currency symbol
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use storefront_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod product;

pub use error::{Error, Result, ResultExt};
pub use product::{
    format_price, is_available, PriceDisplay, ProductId, ProductRecord, DEFAULT_CURRENCY_SYMBOL,
};
