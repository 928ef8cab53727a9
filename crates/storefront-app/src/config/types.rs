//! Configuration types for Storefront
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use storefront_core::DEFAULT_CURRENCY_SYMBOL;

/// Application settings (.storefront/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub cart: CartSettings,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Symbol placed before every price
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Strike through the base price on cards even when there is no discount
    #[serde(default = "default_true")]
    pub strike_plain_price: bool,

    /// Description lines shown on a card before truncation, kept within
    /// [`MIN_DESCRIPTION_LINES`]..=[`MAX_DESCRIPTION_LINES`]
    #[serde(
        default = "default_description_lines",
        deserialize_with = "deserialize_description_lines"
    )]
    pub description_lines: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            currency_symbol: default_currency_symbol(),
            strike_plain_price: true,
            description_lines: default_description_lines(),
        }
    }
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_true() -> bool {
    true
}

pub const MIN_DESCRIPTION_LINES: u16 = 1;
pub const MAX_DESCRIPTION_LINES: u16 = 20;

fn default_description_lines() -> u16 {
    3
}

fn deserialize_description_lines<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let lines = u16::deserialize(deserializer)?;
    Ok(lines.clamp(MIN_DESCRIPTION_LINES, MAX_DESCRIPTION_LINES))
}

/// Which glyph set the TUI draws icons with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Characters available in every terminal font
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

/// Where products come from
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// JSON or TOML catalog file; the built-in sample catalog when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Which cart receives add-to-cart requests
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CartSettings {
    #[serde(default)]
    pub kind: CartKind,
}

/// Cart implementation selected by `[cart] kind` or `--cart`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CartKind {
    /// Reports that carts are not available
    #[default]
    Unimplemented,
    /// Keeps cart lines in process memory
    Memory,
}

impl FromStr for CartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unimplemented" | "none" => Ok(CartKind::Unimplemented),
            "memory" | "in_memory" => Ok(CartKind::Memory),
            other => Err(format!(
                "unknown cart kind '{}' (expected \"unimplemented\" or \"memory\")",
                other
            )),
        }
    }
}
