//! Substitutable collaborators for service tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    codec::{Codec, JsonCodec},
    prelude::*,
    req::{AuthenticatedRequest, Permission, RequestExecutor},
    types::{Notification, NotificationInfo, Order, OrderSnapshot, TradeExecutionUpdateSnapshot},
    Error,
};

/// Records every request and answers all of them with the same reply.
pub(crate) struct RecordingExecutor {
    reply: Result<Vec<u8>>,
    sent: Mutex<Vec<AuthenticatedRequest>>,
}

impl RecordingExecutor {
    pub(crate) fn replying(body: impl Into<String>) -> Self {
        Self {
            reply: Ok(body.into().into_bytes()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(err: Error) -> Self {
        Self {
            reply: Err(err),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn sent(&self) -> Vec<AuthenticatedRequest> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Body of the only request sent so far.
    pub(crate) fn single_body(&self) -> String {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one request");
        String::from_utf8(sent[0].body.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RequestExecutor for RecordingExecutor {
    fn new_authenticated_request_with_body(
        &self,
        permission: Permission,
        path: &str,
        body: Vec<u8>,
    ) -> Result<AuthenticatedRequest> {
        Ok(AuthenticatedRequest::new(permission, path, body))
    }

    async fn execute(&self, request: AuthenticatedRequest) -> Result<Vec<u8>> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(request);
        }
        self.reply.clone()
    }
}

/// Returns a fixed order snapshot and delegates everything else to [`JsonCodec`].
pub(crate) struct ScriptedCodec {
    orders: Option<Vec<Order>>,
}

impl ScriptedCodec {
    pub(crate) fn orders(orders: Vec<Order>) -> Self {
        Self {
            orders: Some(orders),
        }
    }

    pub(crate) fn no_orders() -> Self {
        Self { orders: None }
    }
}

impl Codec for ScriptedCodec {
    fn decode_order_snapshot(&self, _raw: &[u8]) -> Result<Option<OrderSnapshot>> {
        Ok(self.orders.clone().map(OrderSnapshot::new))
    }

    fn decode_trade_snapshot(&self, raw: &[u8]) -> Result<TradeExecutionUpdateSnapshot> {
        JsonCodec.decode_trade_snapshot(raw)
    }

    fn decode_notification(&self, raw: &[u8]) -> Result<Notification> {
        JsonCodec.decode_notification(raw)
    }
}

/// Venue-shaped order rows for the given `(id, symbol)` pairs.
pub(crate) fn order_rows(orders: &[(i64, &str)]) -> String {
    let rows: Vec<String> = orders
        .iter()
        .map(|(id, symbol)| {
            format!(
                r#"[{id},null,null,"{symbol}",1573482478000,1573482478000,0.1,0.1,"EXCHANGE LIMIT",null,null,null,0,"ACTIVE",null,null,100.0,0,0,0]"#
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}

/// A successful `{kind}` notification with no payload.
pub(crate) fn success_notification(kind: &str) -> String {
    format!(r#"[1575289447641,"{kind}",null,null,[],null,"SUCCESS","ok"]"#)
}

pub(crate) fn assert_empty_info(n: &Notification) {
    assert_eq!(n.notify_info, NotificationInfo::Empty);
}
