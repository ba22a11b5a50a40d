use std::fmt;
use std::sync::Arc;

use super::promotion::Promotion;
use crate::error::{StoreError, StoreResult};

/// The closed set of product variants sold by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    /// Physical goods tracked by quantity on hand.
    Stocked,
    /// Virtual goods (licenses and the like). Quantity is pinned at zero and
    /// the product is always purchasable.
    NonStocked,
    /// Stocked goods that may only be bought `maximum` units per order.
    Limited { maximum: i64 },
}

/// A product in the catalog.
#[derive(Debug, Clone)]
pub struct Product {
    name: String,
    price: f64,
    quantity: i64,
    active: bool,
    promotion: Option<Arc<Promotion>>,
    kind: ProductKind,
}

impl Product {
    /// Creates a stocked product.
    ///
    /// # Errors
    /// `InvalidArgument` if the name is blank or price/quantity is negative.
    ///
    /// # Notes
    /// The product starts active even when `quantity` is zero; only later
    /// calls to [`Product::set_quantity`] enforce the activation rule.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> StoreResult<Self> {
        Self::build(name.into(), price, quantity, ProductKind::Stocked)
    }

    /// Creates a non-stocked product with its quantity pinned at zero.
    pub fn non_stocked(name: impl Into<String>, price: f64) -> StoreResult<Self> {
        Self::build(name.into(), price, 0, ProductKind::NonStocked)
    }

    /// Creates a product limited to `maximum` units per order.
    pub fn limited(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        maximum: i64,
    ) -> StoreResult<Self> {
        if maximum < 0 {
            return Err(StoreError::InvalidArgument(format!(
                "maximum cannot be negative: {maximum}"
            )));
        }
        Self::build(name.into(), price, quantity, ProductKind::Limited { maximum })
    }

    fn build(name: String, price: f64, quantity: i64, kind: ProductKind) -> StoreResult<Self> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidArgument(
                "product name cannot be blank".to_string(),
            ));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(StoreError::InvalidArgument(format!(
                "price must be a non-negative number: {price}"
            )));
        }
        if quantity < 0 {
            return Err(StoreError::InvalidArgument(format!(
                "quantity cannot be negative: {quantity}"
            )));
        }
        Ok(Self {
            name,
            price,
            quantity,
            active: true,
            promotion: None,
            kind,
        })
    }

    /// Attaches a promotion, consuming and returning the product.
    pub fn with_promotion(mut self, promotion: Arc<Promotion>) -> Self {
        self.promotion = Some(promotion);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Per-order purchase cap, for limited products.
    pub fn maximum(&self) -> Option<i64> {
        match self.kind {
            ProductKind::Limited { maximum } => Some(maximum),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn promotion(&self) -> Option<&Arc<Promotion>> {
        self.promotion.as_ref()
    }

    /// Replaces (or clears) the attached promotion.
    pub fn set_promotion(&mut self, promotion: Option<Arc<Promotion>>) {
        self.promotion = promotion;
    }

    /// Resets the quantity on hand and toggles activation: zero deactivates,
    /// anything positive activates.
    ///
    /// Non-stocked products ignore the call and stay at zero, active.
    pub fn set_quantity(&mut self, quantity: i64) -> StoreResult<()> {
        if self.kind == ProductKind::NonStocked {
            return Ok(());
        }
        if quantity < 0 {
            return Err(StoreError::InvalidArgument(format!(
                "quantity cannot be negative: {quantity}"
            )));
        }
        self.quantity = quantity;
        self.active = quantity > 0;
        Ok(())
    }

    /// Checks whether `requested` units could be bought right now without
    /// changing anything.
    ///
    /// A negative request is rejected for every kind. For limited products
    /// the purchase cap is checked before stock.
    pub fn check_available(&self, requested: i64) -> StoreResult<()> {
        if requested < 0 {
            return Err(StoreError::InvalidArgument(format!(
                "purchase quantity cannot be negative: {requested}"
            )));
        }
        match self.kind {
            ProductKind::NonStocked => Ok(()),
            ProductKind::Limited { maximum } if requested > maximum => {
                Err(StoreError::PurchaseLimitExceeded {
                    product: self.name.clone(),
                    requested,
                    maximum,
                })
            }
            ProductKind::Stocked | ProductKind::Limited { .. } => {
                if requested > self.quantity {
                    Err(StoreError::InsufficientStock {
                        product: self.name.clone(),
                        requested,
                        available: self.quantity,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Price of `quantity` units, through the attached promotion if any.
    pub fn total_price(&self, quantity: i64) -> f64 {
        match &self.promotion {
            Some(promotion) => promotion.apply(self, quantity),
            None => self.price * quantity as f64,
        }
    }

    /// Buys `requested` units and returns the total price.
    ///
    /// # Errors
    /// - `InvalidArgument` for a negative request
    /// - `PurchaseLimitExceeded` for limited products over their cap
    /// - `InsufficientStock` when the request exceeds the quantity on hand
    ///
    /// On error the quantity is left unchanged.
    pub fn buy(&mut self, requested: i64) -> StoreResult<f64> {
        self.check_available(requested)?;
        if self.kind != ProductKind::NonStocked {
            self.set_quantity(self.quantity - requested)?;
        }
        Ok(self.total_price(requested))
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Price: {}", self.name, self.price)?;
        match self.kind {
            ProductKind::NonStocked => {}
            ProductKind::Stocked => write!(f, ", Quantity: {}", self.quantity)?,
            ProductKind::Limited { maximum } => {
                write!(f, ", Quantity: {}, Maximum: {}", self.quantity, maximum)?
            }
        }
        if let Some(promotion) = &self.promotion {
            write!(f, ", Promotion: {}", promotion.name())?;
        }
        Ok(())
    }
}
