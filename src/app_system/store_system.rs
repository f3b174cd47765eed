use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use super::config::{DataSource, StoreConfig};
use crate::cart_actor::{CartError, CartService, Directive, DirectiveSink};
use crate::catalog::{CatalogFetcher, CatalogTransport, HttpTransport, SampleDataTransport, TransportError};
use crate::clients::CartClient;

/// The running store: the cart service and the handle to drive it.
///
/// Responsible for building the transport, wiring the fetcher into the cart
/// service, and shutting it down.
pub struct StoreSystem {
    pub cart_client: CartClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Starts the cart service. The returned receiver is the directive
    /// stream the presentation layer drains.
    pub fn start(config: &StoreConfig) -> Result<(Self, mpsc::UnboundedReceiver<Directive>), TransportError> {
        info!(data_source = ?config.data_source, "Starting store system");
        let fetcher = CatalogFetcher::new(build_transport(config)?);

        let (sink, directives) = DirectiveSink::channel();
        let (cart_service, cart_client) = CartService::new(config.request_buffer.max(1), Arc::new(fetcher), sink);
        let cart_handle = tokio::spawn(cart_service.run());

        let system = Self {
            cart_client,
            handles: vec![cart_handle],
        };
        Ok((system, directives))
    }

    pub async fn shutdown(self) -> Result<(), CartError> {
        info!("Shutting down system...");
        // Clones of the client may still be alive elsewhere, so ask explicitly.
        self.cart_client.shutdown().await?;
        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(CartError::ActorCommunicationError(format!("Actor task failed: {e}")));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

/// Picks the transport for the configured data source.
pub fn build_transport(config: &StoreConfig) -> Result<Arc<dyn CatalogTransport>, TransportError> {
    match config.data_source {
        DataSource::SampleData => Ok(Arc::new(SampleDataTransport::new())),
        DataSource::Live | DataSource::Staging => Ok(Arc::new(HttpTransport::new(
            &config.base_url,
            &config.products_path,
            config.timeout(),
        )?)),
    }
}
