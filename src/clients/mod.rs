//! Async handles for talking to the store service.

#[macro_use]
mod macros;
mod store_client;

pub use store_client::*;
