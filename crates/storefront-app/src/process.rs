//! Message processing
//!
//! Runs a message and any follow-up messages through the TEA update
//! function, handing resulting actions to the dispatcher.

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::services::Services;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services);
        }

        msg = result.message;
    }
}
