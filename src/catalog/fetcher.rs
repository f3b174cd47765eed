use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::{debug, error, info, instrument};

use super::dtos::ProductsResponse;
use super::error::FetchError;
use super::mapper::map_records;
use super::transport::{CatalogEndpoint, CatalogTransport};
use crate::domain::Product;

/// Anything that can produce the current product catalog.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn products(&self) -> Result<Vec<Arc<Product>>, FetchError>;
}

/// Turns one callback-style transport call into a single awaitable result.
#[derive(Clone)]
pub struct CatalogFetcher {
    transport: Arc<dyn CatalogTransport>,
}

impl CatalogFetcher {
    pub fn new(transport: Arc<dyn CatalogTransport>) -> Self {
        Self { transport }
    }

    /// Requests the catalog and waits for the transport to call back.
    ///
    /// The callback owns the only `oneshot::Sender`, so the caller resumes
    /// exactly once: with the callback's result, or with
    /// [`FetchError::Abandoned`] if the transport drops the callback unused.
    ///
    /// # Errors
    /// Transport and decode failures are wrapped in [`FetchError`]; nothing
    /// is retried here.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Arc<Product>>, FetchError> {
        let (respond_to, response) = oneshot::channel();
        self.transport.request(
            CatalogEndpoint::Products,
            Box::new(move |result| {
                let _ = respond_to.send(result);
            }),
        );

        let body = response.await.map_err(|_| FetchError::Abandoned)??;
        debug!(bytes = body.len(), "Catalog body received");

        let decoded: ProductsResponse = serde_json::from_slice(&body).map_err(|e| {
            error!(error = %e, "Catalog body could not be decoded");
            FetchError::from(e)
        })?;
        let products = map_records(decoded.products);
        info!(product_count = products.len(), "Catalog fetched");
        Ok(products)
    }
}

#[async_trait]
impl ProductSource for CatalogFetcher {
    async fn products(&self) -> Result<Vec<Arc<Product>>, FetchError> {
        self.fetch_products().await
    }
}
