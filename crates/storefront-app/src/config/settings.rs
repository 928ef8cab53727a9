//! Settings parser for .storefront/config.toml

use super::types::Settings;
use std::path::{Path, PathBuf};
use storefront_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const STOREFRONT_DIR: &str = ".storefront";

/// Path of the settings file for a project directory
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(STOREFRONT_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.storefront/config.toml` under `project_path`.
///
/// A missing or unreadable file is not an error: defaults are used and a
/// warning is logged.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit file. Unlike [`load_settings`], a missing
/// or malformed file is an error, since the user asked for it by name.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
    info!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Create `.storefront/config.toml` with commented defaults if missing
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let dir = project_path.join(STOREFRONT_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .storefront dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Storefront Configuration

[ui]
# "unicode" or "nerd_fonts"
icons = "unicode"
currency_symbol = "₹"
# Strike through the base price on cards even without a discount
strike_plain_price = true
description_lines = 3

[catalog]
# JSON array / {"products": [...]} or TOML [[products]] file
# path = "products.json"

[cart]
# "unimplemented" or "memory"
kind = "unimplemented"
"#;
        std::fs::write(&config_path, default_content)?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
