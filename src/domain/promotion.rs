use std::fmt;

use super::product::Product;

/// A named pricing strategy applied to a bulk purchase of one product.
///
/// Promotions are shared between products behind an `Arc` and must not be
/// mutated once attached.
#[derive(Debug, Clone, PartialEq)]
pub enum Promotion {
    /// Flat percentage off every unit.
    PercentageDiscount { name: String, percent: f64 },
    /// Every second unit of a pair is half price.
    SecondHalfPrice { name: String },
    /// Every third unit is free.
    ThirdOneFree { name: String },
}

impl Promotion {
    pub fn percentage_discount(name: impl Into<String>, percent: f64) -> Self {
        Self::PercentageDiscount {
            name: name.into(),
            percent,
        }
    }

    pub fn second_half_price(name: impl Into<String>) -> Self {
        Self::SecondHalfPrice { name: name.into() }
    }

    pub fn third_one_free(name: impl Into<String>) -> Self {
        Self::ThirdOneFree { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::PercentageDiscount { name, .. }
            | Self::SecondHalfPrice { name }
            | Self::ThirdOneFree { name } => name,
        }
    }

    /// Returns the discounted total for `quantity` units of `product`.
    ///
    /// Only the product's unit price is read; neither the product nor its
    /// stock is touched.
    pub fn apply(&self, product: &Product, quantity: i64) -> f64 {
        self.total_for(product.price(), quantity)
    }

    fn total_for(&self, unit_price: f64, quantity: i64) -> f64 {
        let units = quantity as f64;
        match self {
            Self::PercentageDiscount { percent, .. } => {
                unit_price * units * (100.0 - percent) / 100.0
            }
            Self::SecondHalfPrice { .. } => {
                let valid_pairs = (quantity / 2) as f64;
                valid_pairs * unit_price * 0.5 + (units - valid_pairs) * unit_price
            }
            Self::ThirdOneFree { .. } => {
                let free_units = (quantity / 3) as f64;
                unit_price * (units - free_units)
            }
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_percentage_discount() {
        let macbook = Product::new("MacBook Air M2", 1450.0, 100).unwrap();
        let license = Product::non_stocked("Windows License", 125.0).unwrap();

        assert_close(Promotion::percentage_discount("20% off", 20.0).apply(&macbook, 1), 1160.0);
        assert_close(Promotion::percentage_discount("30% off", 30.0).apply(&license, 10), 875.0);
    }

    #[test]
    fn test_second_half_price() {
        let promotion = Promotion::second_half_price("Second Half price!");
        let macbook = Product::new("MacBook Air M2", 1450.0, 100).unwrap();
        let license = Product::non_stocked("Windows License", 125.0).unwrap();

        assert_close(promotion.apply(&macbook, 2), 2175.0);
        assert_close(promotion.apply(&license, 3), 312.5);
        assert_close(promotion.apply(&macbook, 1), 1450.0);
    }

    #[test]
    fn test_third_one_free() {
        let promotion = Promotion::third_one_free("Third One Free!");
        let macbook = Product::new("MacBook Air M2", 1450.0, 100).unwrap();
        let shipping = Product::limited("Shipping", 10.0, 250, 1).unwrap();

        assert_close(promotion.apply(&macbook, 5), 5800.0);
        assert_close(promotion.apply(&shipping, 6), 40.0);
        assert_close(promotion.apply(&shipping, 2), 20.0);
    }

    #[test]
    fn test_apply_leaves_product_untouched() {
        let macbook = Product::new("MacBook Air M2", 1450.0, 100).unwrap();
        Promotion::third_one_free("Third One Free!").apply(&macbook, 30);
        assert_eq!(macbook.quantity(), 100);
        assert!(macbook.is_active());
    }

    #[test]
    fn test_name_is_display() {
        let promotion = Promotion::percentage_discount("30% off!", 30.0);
        assert_eq!(promotion.name(), "30% off!");
        assert_eq!(promotion.to_string(), "30% off!");
    }
}
