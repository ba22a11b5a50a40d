//! # Mock Framework
//!
//! Utilities for testing store clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_list_active`] or [`expect_place_order`] to
//! assert behavior and answer on the service's behalf.

use tokio::sync::mpsc;

use crate::basket::Basket;
use crate::clients::StoreClient;
use crate::store::ListedProduct;
use crate::store_actor::{Response, StoreRequest};

/// Creates a client whose requests land on a receiver the test controls.
///
/// # Testing Strategy
/// Session logic only needs a `StoreClient`. Instead of running a real
/// `StoreService`, the test reads each request off the channel, asserts on it,
/// and replies through its oneshot sender, simulating success or failure
/// deterministically.
pub fn create_mock_client(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a ListActive request
pub async fn expect_list_active(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<Response<Vec<ListedProduct>>> {
    match receiver.recv().await {
        Some(StoreRequest::ListActive { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a PlaceOrder request
pub async fn expect_place_order(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(Basket, Response<f64>)> {
    match receiver.recv().await {
        Some(StoreRequest::PlaceOrder { basket, respond_to }) => Some((basket, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let list_task = tokio::spawn(async move { client.list_active().await });

        let responder = expect_list_active(&mut receiver)
            .await
            .expect("Expected ListActive request");
        responder.send(Ok(Vec::new())).unwrap();

        let result = list_task.await.unwrap();
        assert_eq!(result, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn test_unexpected_request_is_none() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.total_active_quantity().await });

        assert!(expect_list_active(&mut receiver).await.is_none());
        // The request (and its responder) were dropped unanswered.
        assert!(matches!(
            task.await.unwrap(),
            Err(StoreError::ActorCommunicationError(_))
        ));
    }
}
