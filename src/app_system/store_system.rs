use tracing::{error, info};

use crate::clients::StoreClient;
use crate::config::StoreConfig;
use crate::domain::Product;
use crate::error::{StoreError, StoreResult};
use crate::store::Store;
use crate::store_actor::StoreService;

/// The running application: the store service plus a client to reach it.
///
/// Must be created inside a Tokio runtime.
pub struct StoreSystem {
    pub store_client: StoreClient,
    handle: tokio::task::JoinHandle<()>,
}

impl StoreSystem {
    pub fn new(config: &StoreConfig, catalog: Vec<Product>) -> Self {
        info!(
            products = catalog.len(),
            channel_buffer = config.channel_buffer,
            "Starting store system"
        );
        let (service, store_client) =
            StoreService::new(config.channel_buffer, Store::with_products(catalog));
        let handle = tokio::spawn(service.run());

        Self {
            store_client,
            handle,
        }
    }

    /// Stops the store service and waits for it to drain.
    pub async fn shutdown(self) -> StoreResult<()> {
        info!("Shutting down system...");
        self.store_client.shutdown().await?;

        if let Err(e) = self.handle.await {
            error!("Store service task failed: {:?}", e);
            return Err(StoreError::ActorCommunicationError(format!(
                "Store service task failed: {e}"
            )));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
