//! Headless runner
//!
//! Drives a catalog load through the TEA loop without a terminal and emits
//! the resulting events.

use tokio::sync::mpsc;

use storefront_app::config::Settings;
use storefront_app::message::Message;
use storefront_app::process::process_message;
use storefront_app::services::{CatalogSource, Services};
use storefront_app::AppState;
use storefront_core::prelude::*;

use super::{events_for_state, HeadlessEvent};

/// Load the catalog once and print it as NDJSON
pub async fn run_headless(settings: Settings, services: Services) -> Result<()> {
    let mut state = AppState::with_settings(settings);
    state.catalog_name = CatalogSource::describe(&services.catalog);
    info!("Headless load of {}", state.catalog_name);

    let state = load(state, &services).await?;

    for event in events_for_state(&state) {
        event.emit();
    }

    match state.products().error() {
        Some(message) => Err(Error::catalog(message)),
        None => Ok(()),
    }
}

/// Process messages until the catalog load settles
async fn load(mut state: AppState, services: &Services) -> Result<AppState> {
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(16);

    process_message(&mut state, Message::LoadCatalog, &msg_tx, services);

    while state.products().is_loading {
        match msg_rx.recv().await {
            Some(msg) => process_message(&mut state, msg, &msg_tx, services),
            None => {
                HeadlessEvent::error("Catalog loader stopped".to_string(), true).emit();
                return Err(Error::ChannelClosed);
            }
        }
    }

    Ok(state)
}
