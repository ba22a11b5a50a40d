use std::sync::Arc;

use tokio::sync::oneshot;

use crate::basket::Basket;
use crate::domain::{Product, Promotion};
use crate::error::StoreResult;
use crate::store::{ListedProduct, ProductId};

pub type Response<T> = oneshot::Sender<StoreResult<T>>;

/// Requests understood by [`StoreService`](super::StoreService). Each variant
/// carries a oneshot channel for the reply.
#[derive(Debug)]
pub enum StoreRequest {
    AddProduct {
        product: Product,
        respond_to: Response<ProductId>,
    },
    RemoveProduct {
        id: ProductId,
        respond_to: Response<Product>,
    },
    GetProduct {
        id: ProductId,
        respond_to: Response<Option<Product>>,
    },
    ListActive {
        respond_to: Response<Vec<ListedProduct>>,
    },
    TotalActiveQuantity {
        respond_to: Response<i64>,
    },
    SetQuantity {
        id: ProductId,
        quantity: i64,
        respond_to: Response<()>,
    },
    SetPromotion {
        id: ProductId,
        promotion: Option<Arc<Promotion>>,
        respond_to: Response<()>,
    },
    /// Validate the whole basket, then execute it.
    PlaceOrder {
        basket: Basket,
        respond_to: Response<f64>,
    },
    /// Execute without the up-front check; earlier entries stay debited
    /// when a later one fails.
    ExecuteOrder {
        basket: Basket,
        respond_to: Response<f64>,
    },
    Shutdown,
}
