//! Message-driven store service.
//!
//! A single task owns the [`Store`](crate::store::Store) and handles one
//! request at a time, so concurrent sessions never interleave the
//! check-then-debit of a purchase.

mod messages;
mod service;

pub use messages::*;
pub use service::*;
