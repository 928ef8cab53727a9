//! Configuration file parsing for Storefront
//!
//! Supports:
//! - `.storefront/config.toml` - UI and catalog settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, load_settings_file};
pub use types::*;
