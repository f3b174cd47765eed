use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::Product;

/// One product's entry in the shopping cart.
///
/// The product is shared, never copied. `quantity` is the only mutable state
/// and every read and write of it goes through this line's own mutex, so
/// taps racing on the same line are totally ordered while unrelated lines
/// never contend.
///
/// Identity is the product code: two lines for the same code are equal and
/// hash identically whatever their quantities.
pub struct CartLine {
    product: Arc<Product>,
    quantity: Mutex<u32>,
}

impl CartLine {
    /// Wraps `product` with a quantity of zero.
    pub fn new(product: Arc<Product>) -> Self {
        Self::with_quantity(product, 0)
    }

    pub fn with_quantity(product: Arc<Product>, quantity: u32) -> Self {
        Self {
            product,
            quantity: Mutex::new(quantity),
        }
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    /// Adds one and returns the quantity after the change.
    pub fn increase(&self) -> u32 {
        let mut quantity = self.lock();
        *quantity = quantity.saturating_add(1);
        *quantity
    }

    /// Removes one unless already at zero, and returns the quantity after the
    /// (possibly no-op) change.
    pub fn decrease(&self) -> u32 {
        let mut quantity = self.lock();
        if *quantity > 0 {
            *quantity -= 1;
        }
        *quantity
    }

    pub fn quantity(&self) -> u32 {
        *self.lock()
    }

    // A panic while holding the guard cannot leave a half-written u32.
    fn lock(&self) -> MutexGuard<'_, u32> {
        self.quantity.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq for CartLine {
    fn eq(&self, other: &Self) -> bool {
        self.product.code() == other.product.code()
    }
}

impl Eq for CartLine {}

impl Hash for CartLine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.product.code().hash(state);
    }
}

impl fmt::Debug for CartLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartLine")
            .field("code", &self.product.code())
            .field("quantity", &self.quantity())
            .finish()
    }
}
