//! storefront-app - Application state and orchestration for Storefront
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! storefront: product cards with their selection state, the detail view
//! contract, the product list branches, and the application store. It also
//! holds configuration loading and the catalog and cart service traits.

pub mod actions;
pub mod card;
pub mod config;
pub mod detail_view;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod product_list;
pub mod selection;
pub mod services;
pub mod state;
pub mod store;

// Re-export primary types
pub use card::{ActivationTarget, CardState};
pub use detail_view::{DetailViewProps, StockStatus};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use product_list::ListBranch;
pub use selection::SelectionState;
pub use state::{AppState, NoticeLevel, StatusNotice, UiMode};
pub use store::{ApplicationStore, ProductsAction, ProductsReducer, ProductsState, Reducer};
