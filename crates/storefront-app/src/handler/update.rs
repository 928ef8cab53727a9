//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{card, catalog, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.products().is_loading {
                state.animation_frame = state.animation_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Grid Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusLeft => card::handle_focus_left(state),
        Message::FocusRight => card::handle_focus_right(state),
        Message::FocusUp => card::handle_focus_up(state),
        Message::FocusDown => card::handle_focus_down(state),
        Message::FocusFirst => card::handle_focus_first(state),
        Message::FocusLast => card::handle_focus_last(state),

        // ─────────────────────────────────────────────────────────
        // Card Messages
        // ─────────────────────────────────────────────────────────
        Message::ActivateCard { index, target } => card::handle_activate(state, index, target),
        Message::CloseDetail => card::handle_close_detail(state),
        Message::AddToCart { index } => card::handle_add_to_cart(state, index),
        Message::CartCompleted {
            product_name,
            outcome,
        } => card::handle_cart_completed(state, product_name, outcome),
        Message::CartFailed {
            product_name,
            error,
        } => card::handle_cart_failed(state, product_name, error),
        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Catalog Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadCatalog => catalog::handle_load_catalog(state),
        Message::CatalogLoaded { products } => catalog::handle_catalog_loaded(state, products),
        Message::CatalogLoadFailed { error } => catalog::handle_catalog_failed(state, error),
    }
}
