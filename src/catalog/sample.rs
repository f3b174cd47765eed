use tracing::debug;

use super::transport::{CatalogEndpoint, CatalogTransport, Completion};

/// Bundled catalog used by demos and UI tests.
pub const SAMPLE_PRODUCTS: &str = include_str!("../../assets/products_sample.json");

/// Serves canned responses, completing the callback before `request`
/// returns.
#[derive(Debug, Clone)]
pub struct SampleDataTransport {
    body: &'static str,
}

impl SampleDataTransport {
    pub fn new() -> Self {
        Self::with_body(SAMPLE_PRODUCTS)
    }

    pub fn with_body(body: &'static str) -> Self {
        Self { body }
    }
}

impl Default for SampleDataTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogTransport for SampleDataTransport {
    fn request(&self, endpoint: CatalogEndpoint, on_complete: Completion) {
        debug!(?endpoint, "Serving sample data");
        match endpoint {
            CatalogEndpoint::Products => on_complete(Ok(self.body.as_bytes().to_vec())),
        }
    }
}
