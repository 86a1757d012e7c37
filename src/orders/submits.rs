//! Single-order write methods for OrderService.
//!
//! One request per call, no retries: resubmitting after an error is the
//! caller's decision.

use crate::{
    prelude::*,
    types::{Notification, OrderCancelRequest, OrderNewRequest, OrderUpdateRequest},
};

use super::{order_service::OrderService, paths};

impl OrderService {
    /// Submit a new order.
    pub async fn submit_new(&self, order: &OrderNewRequest) -> Result<Notification> {
        let raw = self.write_bytes(paths::ORDER_SUBMIT, order.to_json()?).await?;
        self.codec().decode_notification(&raw)
    }

    /// Change price, amount or flags of an existing order.
    pub async fn submit_update(&self, order: &OrderUpdateRequest) -> Result<Notification> {
        let raw = self.write_bytes(paths::ORDER_UPDATE, order.to_json()?).await?;
        self.codec().decode_notification(&raw)
    }

    /// Cancel one order.
    ///
    /// The returned notification is informational; `Ok` already means the
    /// venue accepted the request.
    pub async fn submit_cancel(&self, cancel: &OrderCancelRequest) -> Result<Notification> {
        let raw = self.write_bytes(paths::ORDER_CANCEL, cancel.to_json()?).await?;
        self.codec().decode_notification(&raw)
    }
}
