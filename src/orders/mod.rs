//! Order endpoints of the authenticated REST API.
//!
//! This module provides the `OrderService` and the batch payload types for:
//! - Active and historical order queries
//! - Single order submit, update and cancel
//! - Cancel-multi filters and multi-op batches
//!
//! # Submodules
//! - `queries` - Order and trade queries
//! - `submits` - Single order writes
//! - `multi` - Batch cancel and multi-op requests

// Type definition modules
mod ops;
mod order_service;
mod paths;

// Method implementation modules (impl OrderService)
mod multi;
mod queries;
mod submits;

#[cfg(test)]
pub(crate) mod testing;

pub use ops::{CancelMultiPayload, CancelOrderMultiRequest, OrderMultiOpsRequest, OrderOp};
pub use order_service::OrderService;
