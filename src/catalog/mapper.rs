use std::sync::Arc;

use super::dtos::ProductRecord;
use crate::domain::Product;

/// Converts a wire record into a domain product, normalizing its price.
pub fn map_record(record: ProductRecord) -> Product {
    Product::new(record.code, record.name, record.price)
}

/// Maps a decoded catalog in source order.
pub fn map_records(records: Vec<ProductRecord>) -> Vec<Arc<Product>> {
    records.into_iter().map(|record| Arc::new(map_record(record))).collect()
}
