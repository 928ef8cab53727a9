//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use storefront_app::config::Settings;
use storefront_app::message::Message;
use storefront_app::process::process_message;
use storefront_app::services::{CatalogSource, Services};
use storefront_app::state::AppState;
use storefront_core::prelude::*;

use super::{event, render, terminal};

/// Run the storefront TUI until the user quits
pub async fn run(settings: Settings, services: Services) -> Result<()> {
    terminal::install_panic_hook();

    let mut state = AppState::with_settings(settings);
    state.catalog_name = CatalogSource::describe(&services.catalog);
    info!("Browsing {}", state.catalog_name);

    let mut term = terminal::init()?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // First load goes through the same path as a manual reload
    process_message(&mut state, Message::LoadCatalog, &msg_tx, &services);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &services);

    if let Err(e) = terminal::restore() {
        error!("{}", e);
    }

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    services: &Services,
) -> Result<()> {
    while !state.should_quit() {
        // Results from background catalog loads and cart requests
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, services);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, services);
        }
    }

    Ok(())
}
