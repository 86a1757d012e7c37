//! Trade execution types.

use serde::{Deserialize, Serialize};

/// One fill generated by an order.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TradeExecutionUpdate {
    pub id: i64,
    pub symbol: String,
    pub mts_create: i64,
    pub order_id: i64,
    pub exec_amount: f64,
    pub exec_price: f64,
    pub order_type: Option<String>,
    pub order_price: Option<f64>,
    pub maker: bool,
    pub fee: f64,
    pub fee_currency: String,
    pub cid: Option<i64>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct TradeExecutionUpdateSnapshot {
    pub snapshot: Vec<TradeExecutionUpdate>,
}

impl TradeExecutionUpdateSnapshot {
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Net executed amount across all fills (negative for sells).
    pub fn total_exec_amount(&self) -> f64 {
        self.snapshot.iter().map(|t| t.exec_amount).sum()
    }
}
