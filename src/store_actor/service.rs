use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use super::messages::{Response, StoreRequest};
use crate::basket::Basket;
use crate::clients::StoreClient;
use crate::domain::{Product, Promotion};
use crate::error::StoreError;
use crate::store::{ListedProduct, ProductId, Store};

pub struct StoreService {
    receiver: mpsc::Receiver<StoreRequest>,
    store: Store,
}

impl StoreService {
    pub fn new(buffer_size: usize, store: Store) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, store };
        let client = StoreClient::new(sender);
        (service, client)
    }

    /// Runs until a `Shutdown` request arrives or every client is dropped.
    #[instrument(name = "store_service", skip(self))]
    pub async fn run(mut self) {
        info!(products = self.store.product_count(), "StoreService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::AddProduct { product, respond_to } => {
                    self.handle_add_product(product, respond_to);
                }
                StoreRequest::RemoveProduct { id, respond_to } => {
                    self.handle_remove_product(id, respond_to);
                }
                StoreRequest::GetProduct { id, respond_to } => {
                    self.handle_get_product(id, respond_to);
                }
                StoreRequest::ListActive { respond_to } => {
                    self.handle_list_active(respond_to);
                }
                StoreRequest::TotalActiveQuantity { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.total_active_quantity()));
                }
                StoreRequest::SetQuantity {
                    id,
                    quantity,
                    respond_to,
                } => {
                    self.handle_set_quantity(id, quantity, respond_to);
                }
                StoreRequest::SetPromotion {
                    id,
                    promotion,
                    respond_to,
                } => {
                    self.handle_set_promotion(id, promotion, respond_to);
                }
                StoreRequest::PlaceOrder { basket, respond_to } => {
                    self.handle_place_order(basket, respond_to);
                }
                StoreRequest::ExecuteOrder { basket, respond_to } => {
                    self.handle_execute_order(basket, respond_to);
                }
                StoreRequest::Shutdown => {
                    info!("StoreService shutting down");
                    break;
                }
            }
        }

        info!("StoreService stopped");
    }

    #[instrument(fields(product_name = %product.name()), skip(self, product, respond_to))]
    fn handle_add_product(&mut self, product: Product, respond_to: Response<ProductId>) {
        let id = self.store.add_product(product);
        info!(product_id = %id, "Product added");
        let _ = respond_to.send(Ok(id));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_remove_product(&mut self, id: ProductId, respond_to: Response<Product>) {
        let result = self.store.remove_product(id);
        match &result {
            Ok(product) => info!(product_name = %product.name(), "Product removed"),
            Err(e) => error!(error = %e, "Product removal failed"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_get_product(&self, id: ProductId, respond_to: Response<Option<Product>>) {
        debug!("Processing get_product request");
        let product = self.store.product(id).cloned();
        match &product {
            Some(product) => debug!(product_name = %product.name(), "Product found"),
            None => debug!("Product not found"),
        }
        let _ = respond_to.send(Ok(product));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_active(&self, respond_to: Response<Vec<ListedProduct>>) {
        let listing = self.store.active_listing();
        debug!(active = listing.len(), "Listing active products");
        let _ = respond_to.send(Ok(listing));
    }

    #[instrument(fields(product_id = %id, quantity = quantity), skip(self, respond_to))]
    fn handle_set_quantity(&mut self, id: ProductId, quantity: i64, respond_to: Response<()>) {
        let result = match self.store.product_mut(id) {
            Some(product) => product.set_quantity(quantity).map(|()| {
                info!(active = product.is_active(), "Quantity updated");
            }),
            None => Err(StoreError::NotFound(id.to_string())),
        };
        if let Err(e) = &result {
            error!(error = %e, "Quantity update failed");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id), skip(self, promotion, respond_to))]
    fn handle_set_promotion(
        &mut self,
        id: ProductId,
        promotion: Option<Arc<Promotion>>,
        respond_to: Response<()>,
    ) {
        let result = match self.store.product_mut(id) {
            Some(product) => {
                info!(
                    promotion = promotion.as_ref().map(|p| p.name()).unwrap_or("none"),
                    "Promotion updated"
                );
                product.set_promotion(promotion);
                Ok(())
            }
            None => {
                error!("Product not found");
                Err(StoreError::NotFound(id.to_string()))
            }
        };
        let _ = respond_to.send(result);
    }

    #[instrument(fields(items = basket.len()), skip(self, basket, respond_to))]
    fn handle_place_order(&mut self, basket: Basket, respond_to: Response<f64>) {
        debug!("Processing place_order request");
        let result = basket.checkout(&mut self.store);
        match &result {
            Ok(total) => info!(total = %total, "Order placed"),
            Err(e) => error!(error = %e, "Order rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(items = basket.len()), skip(self, basket, respond_to))]
    fn handle_execute_order(&mut self, basket: Basket, respond_to: Response<f64>) {
        debug!("Processing execute_order request");
        let result = self.store.execute_order(&basket);
        match &result {
            Ok(total) => info!(total = %total, "Order executed"),
            Err(e) => error!(error = %e, "Order execution stopped"),
        }
        let _ = respond_to.send(result);
    }
}
