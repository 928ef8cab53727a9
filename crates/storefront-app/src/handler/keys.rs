//! Key event handlers for different UI modes

use crate::card::ActivationTarget;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Detail => handle_key_detail(key),
        UiMode::Browse => handle_key_browse(state, key),
    }
}

/// Handle key events while a detail view is open
fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('c' | 'q') => Some(Message::CloseDetail),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events on the product grid
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Reload is ignored while a load is in flight
        InputKey::Char('r') if !state.products().is_loading => Some(Message::LoadCatalog),

        InputKey::Char('x') if state.notice.is_some() => Some(Message::DismissNotice),

        // Everything below needs cards on screen
        _ if !state.list_branch().is_ready() || state.cards.is_empty() => None,

        InputKey::Left | InputKey::Char('h') | InputKey::BackTab => Some(Message::FocusLeft),
        InputKey::Right | InputKey::Char('l') | InputKey::Tab => Some(Message::FocusRight),
        InputKey::Up | InputKey::Char('k') => Some(Message::FocusUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::FocusDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::FocusFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::FocusLast),

        InputKey::Enter | InputKey::Char('t') => Some(Message::ActivateCard {
            index: state.focused,
            target: ActivationTarget::Title,
        }),
        InputKey::Char('i') => Some(Message::ActivateCard {
            index: state.focused,
            target: ActivationTarget::Image,
        }),
        InputKey::Char('a') => Some(Message::AddToCart {
            index: state.focused,
        }),

        _ => None,
    }
}
