//! storefront-tui - Terminal UI for Storefront
//!
//! Renders the product grid, product detail view and status badges with
//! ratatui, and drives the TEA loop from storefront-app with crossterm
//! events.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
