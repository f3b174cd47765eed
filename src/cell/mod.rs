//! Row view-models shown in the catalog list.

use std::fmt::Debug;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::CartLine;
use crate::observer::ObserverHandle;

/// Contract for anything the presentation layer puts in its list.
pub trait CellData: Debug + Send + Sync {
    /// Identifier of the cell kind that renders this row.
    fn cell_identifier(&self) -> &str;

    /// Returns the cart line behind this row, if it is one.
    fn as_cart_line(self: Arc<Self>) -> Option<Arc<CartLine>> {
        None
    }
}

pub const CART_CELL_IDENTIFIER: &str = "CartCell";

impl CellData for CartLine {
    fn cell_identifier(&self) -> &str {
        CART_CELL_IDENTIFIER
    }

    fn as_cart_line(self: Arc<Self>) -> Option<Arc<CartLine>> {
        Some(self)
    }
}

/// A non-cart row, e.g. a section title between groups of products.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeader {
    pub title: String,
}

impl SectionHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl CellData for SectionHeader {
    fn cell_identifier(&self) -> &str {
        "SectionHeader"
    }
}

/// Display values a cart cell renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellField {
    Title(String),
    Price(String),
    Amount(String),
}

/// View-model for one cart row: renders the bound line and turns add/remove
/// taps into quantity changes.
pub struct CartCell {
    line: Option<Arc<CartLine>>,
    fields: ObserverHandle<CellField>,
}

impl CartCell {
    pub fn new(fields: ObserverHandle<CellField>) -> Self {
        Self { line: None, fields }
    }

    /// Binds the cell to `row` and publishes title, price and amount.
    /// Rows that are not cart lines are ignored.
    pub fn assign(&mut self, row: Arc<dyn CellData>) {
        let identifier = row.cell_identifier().to_string();
        let Some(line) = row.as_cart_line() else {
            warn!(cell = %identifier, "Cart cell assigned a non-cart row");
            return;
        };

        let product = line.product();
        self.fields.emit(CellField::Title(product.name().to_string()));
        self.fields.emit(CellField::Price(format_price(product.price())));
        self.fields.emit(CellField::Amount(line.quantity().to_string()));
        self.line = Some(line);
    }

    pub fn did_press_add(&self) -> Option<u32> {
        self.apply(CartLine::increase)
    }

    pub fn did_press_remove(&self) -> Option<u32> {
        self.apply(CartLine::decrease)
    }

    fn apply(&self, change: fn(&CartLine) -> u32) -> Option<u32> {
        let Some(line) = &self.line else {
            debug!("Tap on an unassigned cell");
            return None;
        };
        let quantity = change(line);
        self.fields.emit(CellField::Amount(quantity.to_string()));
        Some(quantity)
    }
}

pub fn format_price(price: f64) -> String {
    format!("{price:.2} €")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    fn cart_row(code: &str, price: f64) -> Arc<CartLine> {
        Arc::new(CartLine::new(Arc::new(Product::new(code, "Coffee Mug", price))))
    }

    #[test]
    fn test_assign_publishes_title_price_and_amount() {
        let (fields, mut updates) = ObserverHandle::channel();
        let mut cell = CartCell::new(fields);
        cell.assign(cart_row("MUG", 7.5));

        assert_eq!(updates.try_recv().unwrap(), CellField::Title("Coffee Mug".into()));
        assert_eq!(updates.try_recv().unwrap(), CellField::Price("7.50 €".into()));
        assert_eq!(updates.try_recv().unwrap(), CellField::Amount("0".into()));
        assert!(updates.try_recv().is_err());
    }

    #[test]
    fn test_taps_update_shared_line_and_amount_text() {
        let (fields, mut updates) = ObserverHandle::channel();
        let mut cell = CartCell::new(fields);
        let line = cart_row("MUG", 7.5);
        cell.assign(line.clone());
        while updates.try_recv().is_ok() {}

        assert_eq!(cell.did_press_add(), Some(1));
        assert_eq!(cell.did_press_add(), Some(2));
        assert_eq!(cell.did_press_remove(), Some(1));
        assert_eq!(line.quantity(), 1);

        let amounts: Vec<_> = std::iter::from_fn(|| updates.try_recv().ok()).collect();
        assert_eq!(
            amounts,
            [
                CellField::Amount("1".into()),
                CellField::Amount("2".into()),
                CellField::Amount("1".into())
            ]
        );
    }

    #[test]
    fn test_non_cart_row_and_unassigned_taps_are_ignored() {
        let (fields, mut updates) = ObserverHandle::channel();
        let mut cell = CartCell::new(fields);
        cell.assign(Arc::new(SectionHeader::new("Merch")));

        assert_eq!(cell.did_press_add(), None);
        assert_eq!(cell.did_press_remove(), None);
        assert!(updates.try_recv().is_err());
    }
}
