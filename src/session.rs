//! A shopper's session against the store service: browse the numbered
//! listing, fill a basket, check out.

use tracing::{debug, info, instrument, warn};

use crate::basket::Basket;
use crate::clients::StoreClient;
use crate::error::{StoreError, StoreResult};
use crate::store::ListedProduct;

pub struct ShoppingSession {
    client: StoreClient,
    listing: Vec<ListedProduct>,
    basket: Basket,
}

impl ShoppingSession {
    /// Opens a session with a snapshot of the active listing.
    #[instrument(skip(client))]
    pub async fn open(client: StoreClient) -> StoreResult<Self> {
        let listing = client.list_active().await?;
        info!(products = listing.len(), "Session opened");
        Ok(Self {
            client,
            listing,
            basket: Basket::new(),
        })
    }

    pub fn listing(&self) -> &[ListedProduct] {
        &self.listing
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// Adds `quantity` units of the product at 1-based `position` in the
    /// listing the session was opened with.
    #[instrument(skip(self))]
    pub fn add(&mut self, position: usize, quantity: i64) -> StoreResult<()> {
        if quantity <= 0 {
            warn!("Rejected non-positive quantity");
            return Err(StoreError::InvalidArgument(format!(
                "quantity must be positive: {quantity}"
            )));
        }
        let row = position
            .checked_sub(1)
            .and_then(|index| self.listing.get(index))
            .ok_or_else(|| {
                warn!("Rejected unknown listing position");
                StoreError::NotFound(format!("listing position {position}"))
            })?;
        self.basket.add(row.id, quantity).inspect_err(|e| {
            warn!(error = %e, "Rejected basket quantity");
        })?;
        debug!(product_id = %row.id, "Product added to basket");
        Ok(())
    }

    /// Submits the basket. Returns `None` without contacting the store when
    /// the basket is empty.
    #[instrument(skip(self), fields(items = self.basket.len()))]
    pub async fn checkout(self) -> StoreResult<Option<f64>> {
        if self.basket.is_empty() {
            info!("Empty basket, no order placed");
            return Ok(None);
        }
        let total = self.client.place_order(self.basket).await?;
        info!(total = %total, "Order made");
        Ok(Some(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use crate::mock_framework::{create_mock_client, expect_list_active, expect_place_order};
    use crate::store::Store;

    fn listing() -> Vec<ListedProduct> {
        Store::with_products([
            Product::new("MacBook Air M2", 1450.0, 100).unwrap(),
            Product::new("Google Pixel 7", 500.0, 250).unwrap(),
        ])
        .active_listing()
    }

    #[tokio::test]
    async fn test_checkout_sends_merged_basket() {
        let (client, mut receiver) = create_mock_client(10);
        let rows = listing();
        let expected_rows = rows.clone();

        let session_task = tokio::spawn(async move {
            let mut session = ShoppingSession::open(client).await?;
            session.add(1, 5)?;
            session.add(2, 1)?;
            session.add(1, 3)?;
            session.checkout().await
        });

        let responder = expect_list_active(&mut receiver)
            .await
            .expect("Expected ListActive");
        responder.send(Ok(rows)).unwrap();

        let (basket, responder) = expect_place_order(&mut receiver)
            .await
            .expect("Expected PlaceOrder");
        let expected =
            Basket::from_entries([(expected_rows[0].id, 8), (expected_rows[1].id, 1)]).unwrap();
        assert_eq!(basket, expected);
        responder.send(Ok(12100.0)).unwrap();

        let result = session_task.await.unwrap();
        assert_eq!(result, Ok(Some(12100.0)));
    }

    #[tokio::test]
    async fn test_add_validates_position_and_quantity() {
        let (client, mut receiver) = create_mock_client(10);
        let rows = listing();

        let session_task = tokio::spawn(async move {
            let mut session = ShoppingSession::open(client).await.unwrap();
            let errors = (
                session.add(0, 1),
                session.add(3, 1),
                session.add(1, 0),
                session.add(1, -2),
            );
            (errors, session.basket().is_empty())
        });

        let responder = expect_list_active(&mut receiver).await.unwrap();
        responder.send(Ok(rows)).unwrap();

        let ((zero, past_end, no_units, negative), empty) = session_task.await.unwrap();
        assert!(matches!(zero, Err(StoreError::NotFound(_))));
        assert!(matches!(past_end, Err(StoreError::NotFound(_))));
        assert!(matches!(no_units, Err(StoreError::InvalidArgument(_))));
        assert!(matches!(negative, Err(StoreError::InvalidArgument(_))));
        assert!(empty);
    }

    #[tokio::test]
    async fn test_add_rejects_overflowing_quantity() {
        let (client, mut receiver) = create_mock_client(10);
        let rows = listing();

        let session_task = tokio::spawn(async move {
            let mut session = ShoppingSession::open(client).await.unwrap();
            session.add(1, i64::MAX).unwrap();
            let overflow = session.add(1, 1);
            (overflow, session.basket().items()[0].quantity)
        });

        let responder = expect_list_active(&mut receiver).await.unwrap();
        responder.send(Ok(rows)).unwrap();

        let (overflow, quantity) = session_task.await.unwrap();
        assert!(matches!(overflow, Err(StoreError::InvalidArgument(_))));
        assert_eq!(quantity, i64::MAX);
    }

    #[tokio::test]
    async fn test_empty_checkout_places_no_order() {
        let (client, mut receiver) = create_mock_client(10);

        let session_task = tokio::spawn(async move {
            let session = ShoppingSession::open(client).await?;
            session.checkout().await
        });

        let responder = expect_list_active(&mut receiver).await.unwrap();
        responder.send(Ok(listing())).unwrap();

        assert_eq!(session_task.await.unwrap(), Ok(None));
        // The session and its client are gone; no PlaceOrder was queued.
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_rejected_order_is_surfaced() {
        let (client, mut receiver) = create_mock_client(10);
        let rows = listing();

        let session_task = tokio::spawn(async move {
            let mut session = ShoppingSession::open(client).await?;
            session.add(1, 101)?;
            session.checkout().await
        });

        expect_list_active(&mut receiver)
            .await
            .unwrap()
            .send(Ok(rows))
            .unwrap();
        let (_, responder) = expect_place_order(&mut receiver).await.unwrap();
        let rejection = StoreError::InsufficientStock {
            product: "MacBook Air M2".to_string(),
            requested: 101,
            available: 100,
        };
        responder.send(Err(rejection.clone())).unwrap();

        assert_eq!(session_task.await.unwrap(), Err(rejection));
    }
}
