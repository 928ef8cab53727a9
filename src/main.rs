//! Storefront - browse a product catalog in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use storefront_app::config::{self, CartKind, Settings};
use storefront_app::services::{cart_for_kind, ConfiguredCatalog, Services};
use storefront_core::prelude::*;

/// Storefront - browse a product catalog in the terminal
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Browse a product catalog in the terminal", long_about = None)]
struct Args {
    /// JSON or TOML catalog file (overrides `[catalog] path`)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Settings file (default: .storefront/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Cart implementation: "unimplemented" or "memory" (overrides `[cart] kind`)
    #[arg(long, value_name = "KIND")]
    cart: Option<CartKind>,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a default .storefront/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    storefront_core::logging::init()?;

    let project_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        config::init_config_dir(&project_path)?;
        eprintln!(
            "Wrote default settings to {}",
            config::config_path(&project_path).display()
        );
        return Ok(());
    }

    let settings = load_settings(&args, &project_path)?;
    let catalog_path = args.catalog.clone().or_else(|| settings.catalog.path.clone());
    let cart_kind = args.cart.unwrap_or(settings.cart.kind);
    info!("Using {:?} cart", cart_kind);
    let services = Services::new(
        ConfiguredCatalog::from_path(catalog_path),
        cart_for_kind(cart_kind),
    );

    let result = if args.headless {
        headless::run_headless(settings, services).await
    } else {
        storefront_tui::run(settings, services).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Storefront exiting");
    result
}

/// An explicit `--config` must exist and parse; the project file falls
/// back to defaults.
fn load_settings(args: &Args, project_path: &std::path::Path) -> Result<Settings> {
    match &args.config {
        Some(path) => config::load_settings_file(path),
        None => Ok(config::load_settings(project_path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_flags() {
        let args = Args::parse_from([
            "storefront",
            "--catalog",
            "shop.json",
            "--headless",
        ]);
        assert_eq!(args.catalog, Some(PathBuf::from("shop.json")));
        assert!(args.headless);
        assert!(args.config.is_none());
        assert!(!args.init_config);
        assert!(args.cart.is_none());
    }

    #[test]
    fn test_cart_flag_overrides_settings() {
        let args = Args::parse_from(["storefront", "--cart", "memory"]);
        assert_eq!(args.cart, Some(CartKind::Memory));

        let settings = Settings::default();
        assert_eq!(
            args.cart.unwrap_or(settings.cart.kind),
            CartKind::Memory
        );
    }

    #[test]
    fn test_cart_kind_from_project_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".storefront")).unwrap();
        std::fs::write(
            config::config_path(dir.path()),
            "[cart]\nkind = \"memory\"\n",
        )
        .unwrap();
        let args = Args::parse_from(["storefront"]);

        let settings = load_settings(&args, dir.path()).unwrap();
        assert_eq!(args.cart.unwrap_or(settings.cart.kind), CartKind::Memory);
    }

    #[test]
    fn test_unknown_cart_flag_is_rejected() {
        assert!(Args::try_parse_from(["storefront", "--cart", "redis"]).is_err());
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::parse_from([
            "storefront",
            "--config",
            dir.path().join("nope.toml").to_str().unwrap(),
        ]);

        assert!(load_settings(&args, dir.path()).is_err());
    }

    #[test]
    fn test_project_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::parse_from(["storefront"]);

        let settings = load_settings(&args, dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
