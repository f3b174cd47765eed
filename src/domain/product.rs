/// A purchasable item from the remote catalog.
///
/// The `code` is assigned upstream and never regenerated locally. The price
/// always carries at most two decimal places, truncated rather than rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    code: String,
    name: String,
    price: f64,
}

impl Product {
    /// Creates a product, normalizing `price` with [`normalize_price`].
    ///
    /// # Arguments
    /// * `code` - Unique catalog code
    /// * `name` - Display name
    /// * `price` - Raw price as received from the catalog
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price: normalize_price(price),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the price, applying the same normalization as construction.
    pub fn set_price(&mut self, price: f64) {
        self.price = normalize_price(price);
    }
}

/// Truncates a price to two decimal places: `floor(price * 100) / 100`.
///
/// A value already sitting on a whole cent keeps that cent, so normalizing
/// twice is a no-op. The allowance covers only the rounding error of the
/// multiplication (a few ulps), never a real fraction of a cent.
pub fn normalize_price(price: f64) -> f64 {
    let cents = price * 100.0;
    let nearest = cents.round();
    let whole_cents = if (cents - nearest).abs() <= cents.abs() * f64::EPSILON * 4.0 {
        nearest
    } else {
        cents.floor()
    };
    whole_cents / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_is_truncated_not_rounded() {
        assert_eq!(Product::new("p1", "Mug", 1.999).price(), 1.99);
        assert_eq!(Product::new("p1", "Mug", 19.999).price(), 19.99);
        assert_eq!(Product::new("p1", "Mug", 19.991).price(), 19.99);
        assert_eq!(Product::new("p1", "Mug", 0.0).price(), 0.0);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for raw in [19.99, 0.1, 0.29, 1.15, 5.0, 7.5, 1234.56] {
            let once = normalize_price(raw);
            assert_eq!(normalize_price(once), once, "raw price {raw}");
            assert_eq!(once, raw);
        }
    }

    #[test]
    fn test_prices_just_below_a_cent_never_round_up() {
        assert_eq!(normalize_price(1.9999999999), 1.99);
        assert_eq!(normalize_price(0.0099999999), 0.0);
        assert_eq!(normalize_price(19.9999999), 19.99);
        assert_eq!(Product::new("p1", "Mug", 1.9999999999).price(), 1.99);
    }

    #[test]
    fn test_set_price_renormalizes() {
        let mut product = Product::new("p1", "Mug", 3.0);
        product.set_price(4.567);
        product.set_name("Big Mug");
        assert_eq!(product.price(), 4.56);
        assert_eq!(product.name(), "Big Mug");
        assert_eq!(product.code(), "p1");
    }
}
