//! Order and order snapshot types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status as reported by the venue.
///
/// The venue appends fill details to some statuses, e.g.
/// `"EXECUTED @ 107.6(-0.2)"`; only the leading word is classified.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Active,
    Executed,
    PartiallyFilled,
    Canceled,
    PostOnlyCanceled,
    Other(String),
}

impl OrderStatus {
    pub fn from_raw(raw: &str) -> Self {
        let word = raw.split([' ', ',']).next().unwrap_or_default();
        match word {
            "ACTIVE" => OrderStatus::Active,
            "EXECUTED" => OrderStatus::Executed,
            "PARTIALLY" => OrderStatus::PartiallyFilled,
            "CANCELED" => OrderStatus::Canceled,
            "POSTONLY" => OrderStatus::PostOnlyCanceled,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Order {
    pub id: i64,
    pub gid: Option<i64>,
    pub cid: Option<i64>,
    pub symbol: String,
    pub mts_create: i64,
    pub mts_update: i64,
    pub amount: f64,
    pub amount_orig: f64,
    pub order_type: String,
    pub type_prev: Option<String>,
    pub mts_tif: Option<i64>,
    pub flags: i64,
    /// Full status text, including any fill details.
    pub status: String,
    pub price: f64,
    pub price_avg: f64,
    pub price_trailing: f64,
    pub price_aux_limit: f64,
    pub notify: bool,
    pub hidden: bool,
    pub placed_id: Option<i64>,
    pub routing: Option<String>,
    pub meta: Option<serde_json::Value>,
}

impl Order {
    pub fn parsed_status(&self) -> OrderStatus {
        OrderStatus::from_raw(&self.status)
    }

    /// UTC creation date formatted `YYYY-MM-DD`, the date half of the client order key.
    pub fn client_order_date(&self) -> Option<String> {
        DateTime::<Utc>::from_timestamp_millis(self.mts_create)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
    }

    /// `(cid, cid_date)` pair identifying this order by client ID, if it has one.
    pub fn client_order_key(&self) -> Option<(i64, String)> {
        let cid = self.cid?;
        Some((cid, self.client_order_date()?))
    }
}

/// All orders matching a query at a point in time.
///
/// Empty is the canonical "no orders" result.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct OrderSnapshot {
    pub snapshot: Vec<Order>,
}

impl OrderSnapshot {
    pub fn new(snapshot: Vec<Order>) -> Self {
        Self { snapshot }
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.snapshot.iter()
    }

    pub fn find_by_id(&self, order_id: i64) -> Option<&Order> {
        self.snapshot.iter().find(|o| o.id == order_id)
    }

    pub(crate) fn into_order(self, order_id: i64) -> Option<Order> {
        self.snapshot.into_iter().find(|o| o.id == order_id)
    }
}

impl IntoIterator for OrderSnapshot {
    type Item = Order;
    type IntoIter = std::vec::IntoIter<Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot.into_iter()
    }
}

#[cfg(test)]
pub(crate) fn order_fixture(id: i64, symbol: &str) -> Order {
    Order {
        id,
        gid: None,
        cid: Some(id * 10),
        symbol: symbol.to_string(),
        mts_create: 1_573_482_478_000,
        mts_update: 1_573_482_478_000,
        amount: 0.5,
        amount_orig: 0.5,
        order_type: "EXCHANGE LIMIT".to_string(),
        type_prev: None,
        mts_tif: None,
        flags: 0,
        status: "ACTIVE".to_string(),
        price: 9000.0,
        price_avg: 0.0,
        price_trailing: 0.0,
        price_aux_limit: 0.0,
        notify: false,
        hidden: false,
        placed_id: None,
        routing: None,
        meta: None,
    }
}
