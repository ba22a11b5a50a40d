use thiserror::Error;

/// Errors raised by the storefront core and the store service.
///
/// Every variant carries enough context to be shown to a shopper as-is.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("There is not enough in stock of {product}: requested {requested}, available quantity = {available}")]
    InsufficientStock {
        product: String,
        requested: i64,
        available: i64,
    },
    #[error("A maximum of {maximum} units of {product} allowed per customer, requested {requested}")]
    PurchaseLimitExceeded {
        product: String,
        requested: i64,
        maximum: i64,
    },
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
