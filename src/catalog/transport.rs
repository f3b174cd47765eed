use super::error::TransportError;

/// Callback a transport invokes with the raw response body.
///
/// `FnOnce` means a transport can complete a request at most once.
pub type Completion = Box<dyn FnOnce(Result<Vec<u8>, TransportError>) + Send + 'static>;

/// Remote requests the catalog knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEndpoint {
    Products,
}

impl CatalogEndpoint {
    pub fn method(&self) -> reqwest::Method {
        match self {
            CatalogEndpoint::Products => reqwest::Method::GET,
        }
    }

    pub fn headers(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            CatalogEndpoint::Products => &[("Content-Type", "application/json")],
        }
    }
}

/// Callback-style remote access. Retry and caching are the implementor's
/// business.
pub trait CatalogTransport: Send + Sync {
    fn request(&self, endpoint: CatalogEndpoint, on_complete: Completion);
}
