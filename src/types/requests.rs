//! Outbound order requests.
//!
//! Each request is what the caller fills in; `enriched_payload()` is what goes
//! on the wire, with boolean switches folded into `flags` and the affiliate
//! code moved under `meta`.

use serde::Serialize;

use crate::{
    consts::{
        ORDER_FLAG_CLOSE, ORDER_FLAG_HIDDEN, ORDER_FLAG_OCO, ORDER_FLAG_POST_ONLY,
        ORDER_FLAG_REDUCE_ONLY,
    },
    prelude::*,
    serde_utils::{is_zero, serialize_f64_as_string, serialize_opt_f64_as_string},
    Error,
};

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct OrderMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aff_code: Option<String>,
}

impl OrderMeta {
    fn from_affiliate(code: &Option<String>) -> Option<Self> {
        code.as_ref().map(|c| OrderMeta {
            aff_code: Some(c.clone()),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderNewRequest {
    pub gid: Option<i64>,
    pub cid: Option<i64>,
    /// e.g. `EXCHANGE LIMIT`, `LIMIT`, `MARKET`
    pub order_type: String,
    pub symbol: String,
    /// Positive to buy, negative to sell.
    pub amount: f64,
    pub price: f64,
    pub leverage: Option<u32>,
    pub price_trailing: Option<f64>,
    pub price_aux_limit: Option<f64>,
    pub price_oco_stop: Option<f64>,
    pub hidden: bool,
    pub post_only: bool,
    pub close: bool,
    pub reduce_only: bool,
    pub oco_order: bool,
    /// Time-in-force, `YYYY-MM-DD HH:MM:SS`
    pub tif: Option<String>,
    pub affiliate_code: Option<String>,
}

/// Wire form of [`OrderNewRequest`].
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OrderNewPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<i64>,
    #[serde(rename = "type")]
    pub order_type: String,
    pub symbol: String,
    #[serde(serialize_with = "serialize_f64_as_string")]
    pub amount: f64,
    #[serde(serialize_with = "serialize_f64_as_string")]
    pub price: f64,
    #[serde(rename = "lev", skip_serializing_if = "Option::is_none")]
    pub leverage: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_f64_as_string"
    )]
    pub price_trailing: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_f64_as_string"
    )]
    pub price_aux_limit: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_f64_as_string"
    )]
    pub price_oco_stop: Option<f64>,
    #[serde(skip_serializing_if = "is_zero")]
    pub flags: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tif: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<OrderMeta>,
}

impl OrderNewRequest {
    pub fn flags(&self) -> i64 {
        let mut flags = 0;
        if self.hidden {
            flags += ORDER_FLAG_HIDDEN;
        }
        if self.post_only {
            flags += ORDER_FLAG_POST_ONLY;
        }
        if self.oco_order {
            flags += ORDER_FLAG_OCO;
        }
        if self.close {
            flags += ORDER_FLAG_CLOSE;
        }
        if self.reduce_only {
            flags += ORDER_FLAG_REDUCE_ONLY;
        }
        flags
    }

    pub fn enriched_payload(&self) -> OrderNewPayload {
        OrderNewPayload {
            gid: self.gid,
            cid: self.cid,
            order_type: self.order_type.clone(),
            symbol: self.symbol.clone(),
            amount: self.amount,
            price: self.price,
            leverage: self.leverage,
            price_trailing: self.price_trailing,
            price_aux_limit: self.price_aux_limit,
            price_oco_stop: self.price_oco_stop,
            flags: self.flags(),
            tif: self.tif.clone(),
            meta: OrderMeta::from_affiliate(&self.affiliate_code),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.enriched_payload()).map_err(|e| Error::json_parse(e.to_string()))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderUpdateRequest {
    pub id: i64,
    pub gid: Option<i64>,
    pub price: Option<f64>,
    pub amount: Option<f64>,
    /// Change of amount, applied instead of `amount` by the venue.
    pub delta: Option<f64>,
    pub leverage: Option<u32>,
    pub price_aux_limit: Option<f64>,
    pub price_trailing: Option<f64>,
    pub hidden: bool,
    pub post_only: bool,
    pub tif: Option<String>,
}

/// Wire form of [`OrderUpdateRequest`].
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OrderUpdatePayload {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<i64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_f64_as_string"
    )]
    pub price: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_f64_as_string"
    )]
    pub amount: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_f64_as_string"
    )]
    pub delta: Option<f64>,
    #[serde(rename = "lev", skip_serializing_if = "Option::is_none")]
    pub leverage: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_f64_as_string"
    )]
    pub price_aux_limit: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_f64_as_string"
    )]
    pub price_trailing: Option<f64>,
    #[serde(skip_serializing_if = "is_zero")]
    pub flags: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tif: Option<String>,
}

impl OrderUpdateRequest {
    pub fn flags(&self) -> i64 {
        let mut flags = 0;
        if self.hidden {
            flags += ORDER_FLAG_HIDDEN;
        }
        if self.post_only {
            flags += ORDER_FLAG_POST_ONLY;
        }
        flags
    }

    pub fn enriched_payload(&self) -> OrderUpdatePayload {
        OrderUpdatePayload {
            id: self.id,
            gid: self.gid,
            price: self.price,
            amount: self.amount,
            delta: self.delta,
            leverage: self.leverage,
            price_aux_limit: self.price_aux_limit,
            price_trailing: self.price_trailing,
            flags: self.flags(),
            tif: self.tif.clone(),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.enriched_payload()).map_err(|e| Error::json_parse(e.to_string()))
    }
}

/// Cancel one order, either by venue ID or by client ID plus client date.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderCancelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<i64>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid_date: Option<String>,
}

impl OrderCancelRequest {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_client_id(cid: i64, cid_date: impl Into<String>) -> Self {
        Self {
            id: None,
            cid: Some(cid),
            cid_date: Some(cid_date.into()),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::json_parse(e.to_string()))
    }
}
