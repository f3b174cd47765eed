use std::sync::Arc;

use super::{CartLine, Product};

/// A cart line frozen at the moment of checkout.
#[derive(Debug, Clone)]
pub struct CheckoutLine {
    pub product: Arc<Product>,
    pub quantity: u32,
}

impl PartialEq for CheckoutLine {
    fn eq(&self, other: &Self) -> bool {
        self.product.code() == other.product.code() && self.quantity == other.quantity
    }
}

/// Point-in-time copy of every cart line with a positive quantity.
///
/// Quantities are read once per line while building, so later taps on the
/// source lines never show up here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutSnapshot {
    lines: Vec<CheckoutLine>,
}

impl CheckoutSnapshot {
    /// Captures the lines with `quantity > 0`, preserving their order.
    pub fn capture<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Self {
        let lines = lines
            .into_iter()
            .filter_map(|line| {
                let quantity = line.quantity();
                (quantity > 0).then(|| CheckoutLine {
                    product: Arc::clone(line.product()),
                    quantity,
                })
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[CheckoutLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price × quantity. Single currency, no tax.
    pub fn subtotal(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.product.price() * f64::from(line.quantity))
            .sum()
    }
}
