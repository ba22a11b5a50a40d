use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::basket::Basket;
use crate::domain::{Product, Promotion};
use crate::error::{StoreError, StoreResult};
use crate::store::{ListedProduct, ProductId};
use crate::store_actor::StoreRequest;

/// Cloneable handle to a running [`StoreService`](crate::store_actor::StoreService).
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub(crate) fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> StoreResult<()> {
        debug!("Sending shutdown request");
        self.sender
            .send(StoreRequest::Shutdown)
            .await
            .map_err(|e| StoreError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(StoreClient => fn add_product(product: Product) -> ProductId as StoreRequest::AddProduct);
client_method!(StoreClient => fn remove_product(id: ProductId) -> Product as StoreRequest::RemoveProduct);
client_method!(StoreClient => fn get_product(id: ProductId) -> Option<Product> as StoreRequest::GetProduct);
client_method!(StoreClient => fn list_active() -> Vec<ListedProduct> as StoreRequest::ListActive);
client_method!(StoreClient => fn total_active_quantity() -> i64 as StoreRequest::TotalActiveQuantity);
client_method!(StoreClient => fn set_quantity(id: ProductId, quantity: i64) -> () as StoreRequest::SetQuantity);
client_method!(StoreClient => fn set_promotion(id: ProductId, promotion: Option<Arc<Promotion>>) -> () as StoreRequest::SetPromotion);
client_method!(StoreClient => fn place_order(basket: Basket) -> f64 as StoreRequest::PlaceOrder);
client_method!(StoreClient => fn execute_order(basket: Basket) -> f64 as StoreRequest::ExecuteOrder);
