//! Basket assembly and checkout.

use crate::error::{StoreError, StoreResult};
use crate::store::{ProductId, Store};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasketItem {
    pub product: ProductId,
    pub quantity: i64,
}

/// The (product, quantity) pairs a shopper collects before checkout.
///
/// Holds at most one entry per product; adding a product again merges the
/// quantities into the existing entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Basket {
    items: Vec<BasketItem>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a basket from (product, quantity) pairs, merging repeats.
    pub fn from_entries(entries: impl IntoIterator<Item = (ProductId, i64)>) -> StoreResult<Self> {
        let mut basket = Self::new();
        for (product, quantity) in entries {
            basket.add(product, quantity)?;
        }
        Ok(basket)
    }

    /// Adds `quantity` units of `product`, merging into an existing entry.
    ///
    /// # Errors
    /// `InvalidArgument` for a negative quantity or when the merged quantity
    /// would overflow. The basket is left unchanged on error.
    pub fn add(&mut self, product: ProductId, quantity: i64) -> StoreResult<()> {
        if quantity < 0 {
            return Err(StoreError::InvalidArgument(format!(
                "basket quantity cannot be negative: {quantity}"
            )));
        }
        match self.items.iter_mut().find(|item| item.product == product) {
            Some(existing) => {
                existing.quantity = existing.quantity.checked_add(quantity).ok_or_else(|| {
                    StoreError::InvalidArgument(format!(
                        "basket quantity for {product} is too large"
                    ))
                })?;
            }
            None => self.items.push(BasketItem { product, quantity }),
        }
        Ok(())
    }

    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks every entry against the store without buying anything.
    ///
    /// Returns the first entry that could not be fulfilled: a product that is
    /// no longer in the store, a limited product over its cap, or a stocked
    /// product short on stock. Non-stocked products always pass.
    pub fn validate(&self, store: &Store) -> StoreResult<()> {
        for item in &self.items {
            let product = store
                .product(item.product)
                .ok_or_else(|| StoreError::NotFound(item.product.to_string()))?;
            product.check_available(item.quantity)?;
        }
        Ok(())
    }

    pub fn has_enough_stock(&self, store: &Store) -> bool {
        self.validate(store).is_ok()
    }

    /// Validates the whole basket, then executes it.
    ///
    /// If any entry fails validation nothing is bought.
    pub fn checkout(&self, store: &mut Store) -> StoreResult<f64> {
        self.validate(store)?;
        store.execute_order(self)
    }
}
