//! The store: an ordered catalog of products and order execution against it.

use std::fmt;

use crate::basket::Basket;
use crate::domain::Product;
use crate::error::{StoreError, StoreResult};

/// Stable handle to a product held by a [`Store`].
///
/// Handles are never reused, so a handle to a removed product stays dangling
/// instead of pointing at a newer product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// One row of the numbered active-product listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedProduct {
    /// 1-based position in the listing.
    pub position: usize,
    pub id: ProductId,
    pub line: String,
}

#[derive(Debug, Default)]
pub struct Store {
    products: Vec<(ProductId, Product)>,
    next_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an initial catalog, keeping its order.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut store = Self::new();
        for product in products {
            store.add_product(product);
        }
        store
    }

    /// Appends a product to the end of the catalog.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        self.next_id += 1;
        let id = ProductId(self.next_id);
        self.products.push((id, product));
        id
    }

    /// Removes a product, handing it back to the caller.
    pub fn remove_product(&mut self, id: ProductId) -> StoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|(candidate, _)| *candidate == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.products.remove(index).1)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, product)| product)
    }

    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products
            .iter_mut()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, product)| product)
    }

    /// Every product slot, active or not, in insertion order.
    pub fn products(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.products.iter().map(|(id, product)| (*id, product))
    }

    /// Number of product slots, active or not.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Active products in insertion order. Inactive ones are omitted.
    pub fn active_products(&self) -> Vec<(ProductId, &Product)> {
        self.products()
            .filter(|(_, product)| product.is_active())
            .collect()
    }

    /// Sum of the quantities on hand of all active products.
    pub fn total_active_quantity(&self) -> i64 {
        self.active_products()
            .iter()
            .map(|(_, product)| product.quantity())
            .sum()
    }

    /// Looks up a product by its 1-based position in the active listing.
    pub fn active_product_at(&self, position: usize) -> Option<ProductId> {
        position
            .checked_sub(1)
            .and_then(|index| self.active_products().get(index).map(|(id, _)| *id))
    }

    /// The numbered active listing, one row per active product.
    pub fn active_listing(&self) -> Vec<ListedProduct> {
        self.active_products()
            .into_iter()
            .enumerate()
            .map(|(index, (id, product))| ListedProduct {
                position: index + 1,
                id,
                line: product.to_string(),
            })
            .collect()
    }

    /// The active listing rendered for display.
    pub fn listing(&self) -> String {
        let mut rendered = String::from("------\n");
        for row in self.active_listing() {
            rendered.push_str(&format!("{}. {}\n", row.position, row.line));
        }
        rendered.push_str("------");
        rendered
    }

    /// Buys every basket entry in order and returns the accumulated total.
    ///
    /// The first failure is returned as-is. Entries bought before it stay
    /// debited; there is no rollback. Use [`Basket::checkout`] to reject a
    /// basket up front instead.
    pub fn execute_order(&mut self, basket: &Basket) -> StoreResult<f64> {
        let mut total = 0.0;
        for item in basket.items() {
            let product = self
                .product_mut(item.product)
                .ok_or_else(|| StoreError::NotFound(item.product.to_string()))?;
            total += product.buy(item.quantity)?;
        }
        Ok(total)
    }
}
