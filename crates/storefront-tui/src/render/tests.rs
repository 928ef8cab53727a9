//! Full-screen render tests

use insta::assert_snapshot;

use super::view;
use crate::test_utils::{create_loaded_state, TestTerminal};
use storefront_app::card::ActivationTarget;
use storefront_app::handler::update;
use storefront_app::message::Message;
use storefront_app::state::{AppState, StatusNotice};
use storefront_app::store::ProductsAction;

fn render_screen(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_loading_screen() {
    let mut state = AppState::new();
    state.dispatch(ProductsAction::FetchStarted);

    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Loading...."));
    assert!(!term.buffer_contains("products"));
}

#[test]
fn test_error_screen() {
    let mut state = AppState::new();
    state.dispatch(ProductsAction::FetchFailed(
        "Catalog file not found: shop.json".to_string(),
    ));

    let term = render_screen(&mut state);

    assert!(term.buffer_contains("\u{26a0} Catalog file not found: shop.json"));
}

#[test]
fn test_loaded_screen_shows_grid() {
    let mut state = create_loaded_state();

    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Storefront / sample catalog"));
    assert!(term.buffer_contains("2 products"));
    assert!(term.buffer_contains("Iphone 17 pro max"));
    assert!(term.buffer_contains("MacBook Pro M5s"));
    assert!(term.buffer_contains("[Enter] Details"));
}

#[test]
fn snapshot_loaded_screen() {
    let mut state = create_loaded_state();

    let term = render_screen(&mut state);

    assert_snapshot!("loaded_screen", term.content());
}

#[test]
fn test_view_records_grid_columns() {
    let mut state = create_loaded_state();

    let mut term = TestTerminal::with_size(130, 30);
    term.draw_with(|frame| view(frame, &mut state));
    assert_eq!(state.grid_columns, 3);

    let mut term = TestTerminal::with_size(50, 30);
    term.draw_with(|frame| view(frame, &mut state));
    assert_eq!(state.grid_columns, 1);
}

#[test]
fn test_open_detail_covers_grid() {
    let mut state = create_loaded_state();
    update(
        &mut state,
        Message::ActivateCard {
            index: 1,
            target: ActivationTarget::Title,
        },
    );

    let term = render_screen(&mut state);

    assert!(term.buffer_contains(" MacBook Pro M5s "));
    assert!(term.buffer_contains("Out Of Stock"));
    assert!(term.buffer_contains("[Esc] Close"));
    assert!(term.buffer_contains("\u{20b9}199000.00"));
}

#[test]
fn test_closed_detail_leaves_grid() {
    let mut state = create_loaded_state();
    let activate = || Message::ActivateCard {
        index: 0,
        target: ActivationTarget::Image,
    };
    update(&mut state, activate());
    update(&mut state, Message::CloseDetail);

    let term = render_screen(&mut state);

    assert!(!term.buffer_contains("In Stock"));
    assert!(term.buffer_contains("[Enter] Details"));
}

#[test]
fn test_notice_in_status_line() {
    let mut state = create_loaded_state();
    state.notice = Some(StatusNotice::warning("Add to cart is not available yet"));

    let term = render_screen(&mut state);

    assert!(term.line_contains(23, "Add to cart is not available yet"));
}
