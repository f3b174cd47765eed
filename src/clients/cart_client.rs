use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::cart_actor::CartError;
use crate::cell::CellData;
use crate::messages::{CartRequest, CheckoutOutcome, LoadOutcome};

/// Handle for driving the cart service from the presentation layer.
///
/// `on_view_ready` suspends until the catalog load has finished and its
/// directives are delivered. `on_checkout` takes the rows currently on
/// screen; rows that are not cart lines are skipped.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|_| CartError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(CartClient => fn on_view_ready() -> LoadOutcome as CartRequest::ViewReady, Error = CartError);
client_method!(CartClient => fn on_checkout(lines: Vec<Arc<dyn CellData>>) -> CheckoutOutcome as CartRequest::Checkout, Error = CartError);
