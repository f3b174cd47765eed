use thiserror::Error;

/// Failures reported by a transport through its completion callback.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Unexpected status code: {0}")]
    Status(u16),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TransportError::Status(status.as_u16()),
            None => TransportError::Request(err.to_string()),
        }
    }
}

/// Why a catalog fetch produced no products.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),
    #[error("Malformed catalog body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Transport dropped the request without completing it")]
    Abandoned,
}
