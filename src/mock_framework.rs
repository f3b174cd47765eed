//! # Mock Framework
//!
//! Utilities for testing the catalog bridge and the cart controller without
//! a network.
//!
//! Use [`create_mock_transport`] to get a transport and a receiver of the
//! requests made through it. Then use [`expect_request`] to pick up a
//! request and complete its callback however the test needs (success,
//! failure, delay, or never).

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::cart_actor::Directive;
use crate::catalog::{CatalogEndpoint, CatalogTransport, Completion, FetchError, ProductSource, TransportError};
use crate::domain::Product;

pub type PendingRequest = (CatalogEndpoint, Completion);

/// Transport that hands every request to the test instead of a server.
pub struct MockTransport {
    sender: mpsc::UnboundedSender<PendingRequest>,
}

impl CatalogTransport for MockTransport {
    fn request(&self, endpoint: CatalogEndpoint, on_complete: Completion) {
        // A closed receiver drops the callback, which the fetcher reports as abandoned.
        let _ = self.sender.send((endpoint, on_complete));
    }
}

/// Creates a mock transport and a receiver for the requests it gets.
pub fn create_mock_transport() -> (Arc<MockTransport>, mpsc::UnboundedReceiver<PendingRequest>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Arc::new(MockTransport { sender }), receiver)
}

/// Waits for the next request made through a mock transport.
pub async fn expect_request(receiver: &mut mpsc::UnboundedReceiver<PendingRequest>) -> Option<PendingRequest> {
    receiver.recv().await
}

/// Builds a catalog body in the wire format.
pub fn catalog_body(records: &[(&str, &str, f64)]) -> Vec<u8> {
    let products: Vec<_> = records
        .iter()
        .map(|(code, name, price)| serde_json::json!({ "code": code, "name": name, "price": price }))
        .collect();
    serde_json::json!({ "products": products }).to_string().into_bytes()
}

/// Product source whose every fetch fails at the transport level.
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[async_trait]
impl ProductSource for FailingSource {
    async fn products(&self) -> Result<Vec<Arc<Product>>, FetchError> {
        Err(TransportError::Request(self.message.clone()).into())
    }
}

/// Collects every directive delivered so far.
pub fn drain_directives(receiver: &mut mpsc::UnboundedReceiver<Directive>) -> Vec<Directive> {
    std::iter::from_fn(|| receiver.try_recv().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport() {
        let (transport, mut requests) = create_mock_transport();

        let (respond_to, response) = tokio::sync::oneshot::channel();
        transport.request(
            CatalogEndpoint::Products,
            Box::new(move |result| {
                let _ = respond_to.send(result);
            }),
        );

        let (endpoint, complete) = expect_request(&mut requests).await.expect("Expected a request");
        assert_eq!(endpoint, CatalogEndpoint::Products);
        complete(Ok(catalog_body(&[("a", "A", 1.0)])));

        let body = response.await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["products"][0]["code"], "a");
    }
}
