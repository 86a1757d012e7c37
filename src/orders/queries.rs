//! Order query methods for OrderService.
//!
//! This module contains read-only methods:
//! - Active and historical orders, optionally filtered by symbol
//! - Single order lookup by ID
//! - Trades generated by an order

use crate::{
    prelude::*,
    types::{Order, OrderSnapshot, TradeExecutionUpdateSnapshot},
    Error,
};

use super::{order_service::OrderService, paths};

impl OrderService {
    /// Active orders for `symbol`; an empty symbol means every symbol.
    ///
    /// Never returns an absent snapshot: "no orders" is an empty one.
    pub async fn list_active(&self, symbol: &str) -> Result<OrderSnapshot> {
        self.fetch_orders(&paths::active_orders(symbol)).await
    }

    /// Past orders for `symbol`; an empty symbol means every symbol.
    pub async fn list_historical(&self, symbol: &str) -> Result<OrderSnapshot> {
        self.fetch_orders(&paths::historical_orders(symbol)).await
    }

    /// All active orders.
    pub async fn all(&self) -> Result<OrderSnapshot> {
        self.list_active("").await
    }

    pub async fn get_by_symbol(&self, symbol: &str) -> Result<OrderSnapshot> {
        self.list_active(symbol).await
    }

    /// All past orders.
    pub async fn all_history(&self) -> Result<OrderSnapshot> {
        self.list_historical("").await
    }

    pub async fn get_history_by_symbol(&self, symbol: &str) -> Result<OrderSnapshot> {
        self.list_historical(symbol).await
    }

    /// Find an active order by ID.
    ///
    /// Fetches every active order and scans it; returns
    /// [`Error::OrderNotFound`] if the fetch succeeded but held no match.
    pub async fn get_active_by_id(&self, order_id: i64) -> Result<Order> {
        self.all()
            .await?
            .into_order(order_id)
            .ok_or(Error::OrderNotFound(order_id))
    }

    /// Find a past order by ID. Same semantics as [`Self::get_active_by_id`].
    pub async fn get_historical_by_id(&self, order_id: i64) -> Result<Order> {
        self.all_history()
            .await?
            .into_order(order_id)
            .ok_or(Error::OrderNotFound(order_id))
    }

    /// Trades generated by one order.
    pub async fn list_trades_for_order(
        &self,
        symbol: &str,
        order_id: i64,
    ) -> Result<TradeExecutionUpdateSnapshot> {
        let raw = self.read(&paths::order_trades(symbol, order_id)).await?;
        self.codec().decode_trade_snapshot(&raw)
    }

    async fn fetch_orders(&self, path: &str) -> Result<OrderSnapshot> {
        let raw = self.read(path).await?;
        Ok(self.codec().decode_order_snapshot(&raw)?.unwrap_or_default())
    }
}
