use serde::Deserialize;

/// A catalog item exactly as it arrives on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    pub name: String,
    pub price: f64,
}

/// Body of the catalog response: `{ "products": [ ... ] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductRecord>,
}
