use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, error, instrument};

use super::error::TransportError;
use super::transport::{CatalogEndpoint, CatalogTransport, Completion};

/// Fetches the catalog over HTTP. Each request runs on its own tokio task
/// and completes the callback from there.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    products_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, products_path: &str, timeout: Duration) -> Result<Self, TransportError> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let products_url = Url::parse(&base)
            .and_then(|base| base.join(products_path.trim_start_matches('/')))
            .map_err(|e| TransportError::InvalidUrl(format!("{base_url}: {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client, products_url })
    }

    pub fn url_for(&self, endpoint: CatalogEndpoint) -> &Url {
        match endpoint {
            CatalogEndpoint::Products => &self.products_url,
        }
    }
}

impl CatalogTransport for HttpTransport {
    #[instrument(skip(self, on_complete), fields(url = %self.url_for(endpoint)))]
    fn request(&self, endpoint: CatalogEndpoint, on_complete: Completion) {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!(error = %e, "No async runtime to run the request on");
                on_complete(Err(TransportError::Request(e.to_string())));
                return;
            }
        };

        let mut request = self
            .client
            .request(endpoint.method(), self.url_for(endpoint).clone());
        for (name, value) in endpoint.headers() {
            request = request.header(*name, *value);
        }

        runtime.spawn(async move {
            debug!("Sending request");
            let result: Result<Vec<u8>, reqwest::Error> = async {
                let response = request.send().await?.error_for_status()?;
                Ok(response.bytes().await?.to_vec())
            }
            .await;
            if let Err(e) = &result {
                error!(error = %e, "Catalog request failed");
            }
            on_complete(result.map_err(TransportError::from));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogFetcher, FetchError};
    use httpmock::prelude::*;
    use std::sync::Arc;

    const BODY: &str = r#"{"products":[
        {"code":"VOUCHER","name":"Voucher","price":5.0},
        {"code":"TSHIRT","name":"T-Shirt","price":20.009}
    ]}"#;

    #[test]
    fn test_products_url_joins_base_and_path() {
        let transport =
            HttpTransport::new("https://shop.example/api", "/catalog/products.json", Duration::from_secs(1))
                .unwrap();
        assert_eq!(
            transport.url_for(CatalogEndpoint::Products).as_str(),
            "https://shop.example/api/catalog/products.json"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = HttpTransport::new("not a url", "products.json", Duration::from_secs(1));
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_over_http() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/catalog/products.json")
                    .header("Content-Type", "application/json");
                then.status(200).header("content-type", "application/json").body(BODY);
            })
            .await;

        let transport =
            HttpTransport::new(&server.base_url(), "catalog/products.json", Duration::from_secs(5)).unwrap();
        let fetcher = CatalogFetcher::new(Arc::new(transport));
        let products = fetcher.fetch_products().await.unwrap();

        mock.assert_async().await;
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].code(), "VOUCHER");
        assert_eq!(products[1].price(), 20.0);
    }

    #[tokio::test]
    async fn test_server_error_becomes_status_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products.json");
                then.status(500);
            })
            .await;

        let transport = HttpTransport::new(&server.base_url(), "products.json", Duration::from_secs(5)).unwrap();
        let fetcher = CatalogFetcher::new(Arc::new(transport));
        let err = fetcher.fetch_products().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(TransportError::Status(500))));
    }
}
