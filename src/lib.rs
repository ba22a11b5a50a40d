//! # Storefront
//!
//! An in-memory storefront: a catalog of stocked, virtual and
//! purchase-limited products, promotional pricing, and basket checkout
//! against live stock.
//!
//! ## Layers
//!
//! - **Core** (synchronous, never logs) - [`domain::Product`], [`domain::Promotion`],
//!   [`store::Store`], [`basket::Basket`]
//! - **Service** - [`store_actor::StoreService`] owns the store and serialises
//!   requests; [`clients::StoreClient`] is the cloneable handle to it
//! - **Workflow** - [`session::ShoppingSession`] browses the numbered listing,
//!   builds a basket and checks out
//! - **System** - [`app_system::StoreSystem`] startup/shutdown and
//!   [`app_system::setup_tracing`]
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront::basket::Basket;
//! use storefront::domain::Product;
//! use storefront::store::Store;
//!
//! let mut store = Store::new();
//! let macbook = store.add_product(Product::new("MacBook Air M2", 1450.0, 100)?);
//!
//! let basket = Basket::from_entries([(macbook, 1)])?;
//! assert_eq!(basket.checkout(&mut store)?, 1450.0);
//! assert_eq!(store.product(macbook).map(|p| p.quantity()), Some(99));
//! # Ok::<(), storefront::error::StoreError>(())
//! ```

pub mod app_system;
pub mod basket;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod store;
pub mod store_actor;

#[cfg(test)]
mod mock_framework;

pub use error::{StoreError, StoreResult};
