//! Payload types for the batch endpoints `order/multi` and `order/cancel/multi`.

use serde::{
    ser::{SerializeStruct, SerializeTuple},
    Serialize, Serializer,
};

use crate::{
    serde_utils::{is_none_or_empty, serialize_opt_bool_as_int},
    types::{
        Order, OrderCancelRequest, OrderNewPayload, OrderNewRequest, OrderUpdatePayload,
        OrderUpdateRequest,
    },
};

/// Filter for cancelling many orders at once.
///
/// Unset fields and empty lists are omitted from the payload. Setting `all` together with any
/// of the other filters is sent as-is; the venue decides precedence.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CancelOrderMultiRequest {
    #[serde(rename = "id", skip_serializing_if = "is_none_or_empty")]
    pub order_ids: Option<Vec<i64>>,
    #[serde(rename = "gid", skip_serializing_if = "is_none_or_empty")]
    pub group_order_ids: Option<Vec<i64>>,
    /// `(cid, cid_date)` pairs, serialized as `[cid, "YYYY-MM-DD"]`.
    #[serde(rename = "cid", skip_serializing_if = "is_none_or_empty")]
    pub client_order_ids: Option<Vec<(i64, String)>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_bool_as_int"
    )]
    pub all: Option<bool>,
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

impl CancelOrderMultiRequest {
    pub fn by_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            order_ids: non_empty(ids.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn by_group_ids(gids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            group_order_ids: non_empty(gids.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn by_client_ids(cids: impl IntoIterator<Item = (i64, String)>) -> Self {
        Self {
            client_order_ids: non_empty(cids.into_iter().collect()),
            ..Default::default()
        }
    }

    /// Client-ID filter built from orders that carry a client ID; the rest are skipped.
    pub fn by_client_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        Self::by_client_ids(orders.into_iter().filter_map(Order::client_order_key))
    }

    pub fn cancel_all() -> Self {
        Self {
            all: Some(true),
            ..Default::default()
        }
    }

    /// True when nothing would be serialized, i.e. the request matches nothing.
    pub fn is_empty(&self) -> bool {
        !self.has_list_filter() && self.all.is_none()
    }

    /// True when `all` is combined with an explicit filter.
    pub fn is_ambiguous(&self) -> bool {
        self.all == Some(true) && self.has_list_filter()
    }

    fn has_list_filter(&self) -> bool {
        !is_none_or_empty(&self.order_ids)
            || !is_none_or_empty(&self.group_order_ids)
            || !is_none_or_empty(&self.client_order_ids)
    }
}

/// Payload of an `oc_multi` operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CancelMultiPayload {
    /// Always sent as `{"id": [...]}`, even when the list is empty.
    Ids(Vec<i64>),
    /// Any cancel-multi filter, with its unset and empty fields omitted.
    Filter(CancelOrderMultiRequest),
}

impl Serialize for CancelMultiPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CancelMultiPayload::Ids(ids) => {
                let mut state = serializer.serialize_struct("CancelMultiPayload", 1)?;
                state.serialize_field("id", ids)?;
                state.end()
            }
            CancelMultiPayload::Filter(filter) => filter.serialize(serializer),
        }
    }
}

/// One operation of a multi-op request.
///
/// Serialized positionally as `[tag, payload]`.
#[derive(Clone, Debug, PartialEq)]
pub enum OrderOp {
    /// `on`
    New(OrderNewPayload),
    /// `ou`
    Update(OrderUpdatePayload),
    /// `oc`
    Cancel(OrderCancelRequest),
    /// `oc_multi`
    CancelMulti(CancelMultiPayload),
}

impl OrderOp {
    pub fn new_order(order: &OrderNewRequest) -> Self {
        OrderOp::New(order.enriched_payload())
    }

    pub fn update_order(order: &OrderUpdateRequest) -> Self {
        OrderOp::Update(order.enriched_payload())
    }

    pub fn cancel(order_id: i64) -> Self {
        OrderOp::Cancel(OrderCancelRequest::by_id(order_id))
    }

    pub fn cancel_many(order_ids: impl IntoIterator<Item = i64>) -> Self {
        OrderOp::CancelMulti(CancelMultiPayload::Ids(order_ids.into_iter().collect()))
    }

    /// `oc_multi` with an arbitrary filter (group IDs, client IDs, all).
    pub fn cancel_matching(filter: CancelOrderMultiRequest) -> Self {
        OrderOp::CancelMulti(CancelMultiPayload::Filter(filter))
    }

    pub fn tag(&self) -> &'static str {
        match self {
            OrderOp::New(_) => "on",
            OrderOp::Update(_) => "ou",
            OrderOp::Cancel(_) => "oc",
            OrderOp::CancelMulti(_) => "oc_multi",
        }
    }
}

impl Serialize for OrderOp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut op = serializer.serialize_tuple(2)?;
        op.serialize_element(self.tag())?;
        match self {
            OrderOp::New(payload) => op.serialize_element(payload)?,
            OrderOp::Update(payload) => op.serialize_element(payload)?,
            OrderOp::Cancel(payload) => op.serialize_element(payload)?,
            OrderOp::CancelMulti(payload) => op.serialize_element(payload)?,
        }
        op.end()
    }
}

/// Body of `order/multi`: `{"ops": [[tag, payload], ...]}` in caller order.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct OrderMultiOpsRequest {
    pub ops: Vec<OrderOp>,
}

impl From<Vec<OrderOp>> for OrderMultiOpsRequest {
    fn from(ops: Vec<OrderOp>) -> Self {
        Self { ops }
    }
}
