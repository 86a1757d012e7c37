//! Core OrderService implementation.
//!
//! The OrderService turns order intents into authenticated requests and decodes
//! the venue's answers. Methods are organized into submodules:
//! - `queries` - Active/historical orders and order trades
//! - `submits` - Single order submit, update and cancel
//! - `multi` - Cancel-multi and multi-op batches

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::{
    codec::{Codec, JsonCodec},
    prelude::*,
    req::{HttpClient, Permission, RequestExecutor},
    types::Notification,
    Error,
};

/// Stateless façade over the authenticated order endpoints.
///
/// Holds only shared handles to its collaborators, so clones are cheap and
/// every method can be called concurrently.
#[derive(Clone)]
pub struct OrderService {
    executor: Arc<dyn RequestExecutor>,
    codec: Arc<dyn Codec>,
}

impl std::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderService").finish_non_exhaustive()
    }
}

impl OrderService {
    pub fn new(executor: Arc<dyn RequestExecutor>, codec: Arc<dyn Codec>) -> OrderService {
        OrderService { executor, codec }
    }

    /// Service over the default HTTP executor and JSON codec.
    pub fn with_http_client(http_client: HttpClient) -> OrderService {
        OrderService::new(Arc::new(http_client), Arc::new(JsonCodec))
    }

    pub(crate) fn codec(&self) -> &dyn Codec {
        self.codec.as_ref()
    }

    /// Read-permission request with no payload.
    pub(crate) async fn read(&self, path: &str) -> Result<Vec<u8>> {
        debug!("Sending order read request to {path}");
        let request = self
            .executor
            .new_authenticated_request(Permission::Read, path)?;
        self.executor.execute(request).await
    }

    /// Write-permission request with an already serialized body.
    pub(crate) async fn write_bytes(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        debug!("Sending order write request to {path}");
        let request =
            self.executor
                .new_authenticated_request_with_body(Permission::Write, path, body)?;
        self.executor.execute(request).await
    }

    /// Serialize `payload`, post it with write permission and decode the notification.
    pub(crate) async fn post_for_notification<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Notification> {
        let body = serde_json::to_vec(payload).map_err(|e| Error::JsonParse(e.to_string()))?;
        let raw = self.write_bytes(path, body).await?;
        self.codec.decode_notification(&raw)
    }
}
