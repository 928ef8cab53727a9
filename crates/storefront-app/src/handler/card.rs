//! Card interaction and grid focus handlers

use storefront_core::format_price;
use tracing::{debug, info};

use crate::card::{cart_control_enabled, ActivationTarget};
use crate::detail_view::DetailViewProps;
use crate::services::CartOutcome;
use crate::state::{AppState, StatusNotice};

use super::{UpdateAction, UpdateResult};

/// Image or title activation on a card
pub fn handle_activate(
    state: &mut AppState,
    index: usize,
    target: ActivationTarget,
) -> UpdateResult {
    let Some(product) = state.product(index).cloned() else {
        debug!("Activation on missing card {}", index);
        return UpdateResult::none();
    };

    if let Some(card) = state.cards.get_mut(index) {
        card.on_image_or_title_activate(&product);
        debug!(
            "Card {} {:?} activated, detail open = {}",
            product.id,
            target,
            card.selection.is_open()
        );
    }
    state.focused = index;
    UpdateResult::none()
}

/// Close control of the open detail view.
///
/// The view gets a snapshot of the selection and asks the owning card to
/// hide it through the card's setter.
pub fn handle_close_detail(state: &mut AppState) -> UpdateResult {
    let Some(index) = state.open_card_index() else {
        return UpdateResult::none();
    };

    let is_available = state
        .product(index)
        .map(|p| p.is_available())
        .unwrap_or(false);
    let card = &mut state.cards[index];
    let snapshot = card.selection.selected().cloned();
    let props = DetailViewProps::new(card.selection.is_open(), snapshot.as_ref(), is_available);

    props.on_close(&mut card.selection.open_setter());
    UpdateResult::none()
}

/// Cart control on a card. Disabled controls do nothing.
pub fn handle_add_to_cart(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(product) = state.product(index) else {
        return UpdateResult::none();
    };

    if !cart_control_enabled(product) {
        debug!("Cart control disabled for product {}", product.id);
        return UpdateResult::none();
    }

    info!("Add to cart: product {}", product.id);
    UpdateResult::action(UpdateAction::AddToCart {
        product: product.clone(),
    })
}

pub fn handle_cart_completed(
    state: &mut AppState,
    product_name: String,
    outcome: CartOutcome,
) -> UpdateResult {
    state.notice = Some(match outcome {
        CartOutcome::Added {
            line_count, total, ..
        } => StatusNotice::info(format!(
            "Added {} to cart ({} item{}, total {})",
            product_name,
            line_count,
            if line_count == 1 { "" } else { "s" },
            format_price(&state.settings.ui.currency_symbol, total)
        )),
        CartOutcome::NotImplemented => {
            StatusNotice::warning(format!("Add to cart is not available yet ({})", product_name))
        }
    });
    UpdateResult::none()
}

pub fn handle_cart_failed(state: &mut AppState, product_name: String, error: String) -> UpdateResult {
    state.notice = Some(StatusNotice::error(format!(
        "Could not add {} to cart: {}",
        product_name, error
    )));
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Grid focus
// ─────────────────────────────────────────────────────────────────────────────

fn last_index(state: &AppState) -> usize {
    state.cards.len().saturating_sub(1)
}

pub fn handle_focus_left(state: &mut AppState) -> UpdateResult {
    state.focused = state.focused.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_focus_right(state: &mut AppState) -> UpdateResult {
    state.focused = (state.focused + 1).min(last_index(state));
    UpdateResult::none()
}

pub fn handle_focus_up(state: &mut AppState) -> UpdateResult {
    let columns = state.grid_columns.max(1);
    if state.focused >= columns {
        state.focused -= columns;
    }
    UpdateResult::none()
}

pub fn handle_focus_down(state: &mut AppState) -> UpdateResult {
    let columns = state.grid_columns.max(1);
    if state.focused + columns < state.cards.len() {
        state.focused += columns;
    }
    UpdateResult::none()
}

pub fn handle_focus_first(state: &mut AppState) -> UpdateResult {
    state.focused = 0;
    UpdateResult::none()
}

pub fn handle_focus_last(state: &mut AppState) -> UpdateResult {
    state.focused = last_index(state);
    UpdateResult::none()
}
