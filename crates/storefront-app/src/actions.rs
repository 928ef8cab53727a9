//! Action handlers: UpdateAction dispatch and background task spawning

use storefront_core::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::message::Message;
use crate::services::{CatalogSource, Services};
use crate::UpdateAction;

/// Execute an action returned by `update`
///
/// Catalog loads run on a background task. Cart requests are answered
/// immediately; the result is queued as a message either way.
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, services: &Services) {
    match action {
        UpdateAction::LoadCatalog => {
            let catalog = services.catalog.clone();
            tokio::spawn(async move {
                let msg = match CatalogSource::load(&catalog).await {
                    Ok(products) => Message::CatalogLoaded { products },
                    Err(e) => {
                        if e.is_recoverable() {
                            warn!("Catalog load failed: {}", e);
                        } else {
                            error!("Catalog load failed: {:?}", e);
                        }
                        Message::CatalogLoadFailed {
                            error: e.to_string(),
                        }
                    }
                };
                if msg_tx.send(msg).await.is_err() {
                    debug!("Catalog result dropped, event loop has exited");
                }
            });
        }

        UpdateAction::AddToCart { product } => {
            let msg = match services.cart.add_to_cart(&product) {
                Ok(outcome) => Message::CartCompleted {
                    product_name: product.name,
                    outcome,
                },
                Err(e) => Message::CartFailed {
                    product_name: product.name,
                    error: e.to_string(),
                },
            };
            if let Err(e) = msg_tx
                .try_send(msg)
                .map_err(|e| Error::channel_send(format!("cart result: {}", e)))
            {
                warn!("{}", e);
            }
        }
    }
}
