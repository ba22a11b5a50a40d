//! The catalog the store opens with.

use std::sync::Arc;

use crate::domain::{Product, Promotion};
use crate::error::StoreResult;

/// Builds the initial product list, with shared promotions attached.
pub fn default_catalog() -> StoreResult<Vec<Product>> {
    let second_half_price = Arc::new(Promotion::second_half_price("Second Half price!"));
    let third_one_free = Arc::new(Promotion::third_one_free("Third One Free!"));
    let thirty_percent = Arc::new(Promotion::percentage_discount("30% off!", 30.0));

    Ok(vec![
        Product::new("MacBook Air M2", 1450.0, 100)?.with_promotion(second_half_price),
        Product::new("Bose QuietComfort Earbuds", 250.0, 500)?
            .with_promotion(third_one_free.clone()),
        Product::new("Google Pixel 7", 500.0, 250)?,
        Product::non_stocked("Windows License", 125.0)?.with_promotion(thirty_percent),
        Product::limited("Shipping", 10.0, 250, 1)?.with_promotion(third_one_free),
    ])
}
