use tracing::{error, info, Instrument};

use storefront::app_system::{setup_tracing, StoreSystem};
use storefront::catalog::default_catalog;
use storefront::config::StoreConfig;
use storefront::session::ShoppingSession;
use storefront::StoreError;

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    let config = StoreConfig::from_env()?;
    setup_tracing(&config);

    info!("Starting storefront");

    let system = StoreSystem::new(&config, default_catalog()?);

    let listing = system.store_client.list_active().await?;
    for row in &listing {
        info!("{}. {}", row.position, row.line);
    }
    let total_quantity = system.store_client.total_active_quantity().await?;
    info!(total_quantity, "Total of {} items in store", total_quantity);

    let span = tracing::info_span!("order_processing");
    let order = async {
        let mut session = ShoppingSession::open(system.store_client.clone()).await?;
        session.add(1, 2)?;
        session.add(4, 3)?;
        session.add(5, 1)?;
        session.checkout().await
    }
    .instrument(span)
    .await;

    match order {
        Ok(Some(total)) => info!(total = %total, "Order made! Total payment: {}", total),
        Ok(None) => info!("No order placed"),
        Err(e) => error!(error = %e, "Error while making order"),
    }

    // A basket over the shipping limit is rejected as a whole.
    let span = tracing::info_span!("rejected_order");
    let rejected = async {
        let mut session = ShoppingSession::open(system.store_client.clone()).await?;
        session.add(2, 1)?;
        session.add(5, 2)?;
        session.checkout().await
    }
    .instrument(span)
    .await;

    if let Err(e) = rejected {
        error!(error = %e, "Error while making order");
    }

    system.shutdown().await?;

    info!("Thank you. Goodbye!");
    Ok(())
}
