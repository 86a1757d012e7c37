//! Decoding of raw venue responses into typed snapshots.
//!
//! The venue answers with positional JSON arrays rather than keyed objects.
//! [`JsonCodec`] maps array slots onto struct fields; unknown trailing slots
//! are ignored and `null` is accepted wherever a slot is optional.

use serde_json::Value;

use crate::{
    prelude::*,
    types::{
        Notification, NotificationInfo, Order, OrderSnapshot, TradeExecutionUpdate,
        TradeExecutionUpdateSnapshot,
    },
    Error,
};

/// Turns raw response bytes into domain values.
pub trait Codec: Send + Sync {
    /// `Ok(None)` when the venue returned no orders.
    fn decode_order_snapshot(&self, raw: &[u8]) -> Result<Option<OrderSnapshot>>;

    fn decode_trade_snapshot(&self, raw: &[u8]) -> Result<TradeExecutionUpdateSnapshot>;

    fn decode_notification(&self, raw: &[u8]) -> Result<Notification>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode_order_snapshot(&self, raw: &[u8]) -> Result<Option<OrderSnapshot>> {
        let value = parse(raw)?;
        let snapshot = order_snapshot_from_value(&value)?;
        Ok(snapshot.filter(|s| !s.is_empty()))
    }

    fn decode_trade_snapshot(&self, raw: &[u8]) -> Result<TradeExecutionUpdateSnapshot> {
        let value = parse(raw)?;
        let rows = match &value {
            Value::Null => return Ok(TradeExecutionUpdateSnapshot::default()),
            Value::Array(rows) => rows,
            other => return Err(Error::decode("trades", format!("expected array, got {other}"))),
        };
        let snapshot = rows
            .iter()
            .map(|row| trade_from_fields(&Fields::new("trade", row)?))
            .collect::<Result<Vec<_>>>()?;
        Ok(TradeExecutionUpdateSnapshot { snapshot })
    }

    fn decode_notification(&self, raw: &[u8]) -> Result<Notification> {
        notification_from_value(&parse(raw)?)
    }
}

fn parse(raw: &[u8]) -> Result<Value> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(raw).map_err(|e| Error::json_parse(e.to_string()))
}

/// Positional view over one venue array.
struct Fields<'a> {
    kind: &'static str,
    items: &'a [Value],
}

impl<'a> Fields<'a> {
    fn new(kind: &'static str, value: &'a Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Self { kind, items }),
            other => Err(Error::decode(kind, format!("expected array, got {other}"))),
        }
    }

    fn slot(&self, idx: usize) -> &'a Value {
        self.items.get(idx).unwrap_or(&Value::Null)
    }

    fn err(&self, name: &str, expected: &str, idx: usize) -> Error {
        Error::decode(
            &format!("{}.{name}", self.kind),
            format!("expected {expected} at index {idx}, got {}", self.slot(idx)),
        )
    }

    fn opt_i64(&self, idx: usize, name: &str) -> Result<Option<i64>> {
        match self.slot(idx) {
            Value::Null => Ok(None),
            v => v.as_i64().map(Some).ok_or_else(|| self.err(name, "integer", idx)),
        }
    }

    fn i64(&self, idx: usize, name: &str) -> Result<i64> {
        self.opt_i64(idx, name)?
            .ok_or_else(|| self.err(name, "integer", idx))
    }

    fn opt_f64(&self, idx: usize, name: &str) -> Result<Option<f64>> {
        match self.slot(idx) {
            Value::Null => Ok(None),
            Value::String(s) => s
                .parse::<f64>()
                .map(Some)
                .map_err(|_| self.err(name, "number", idx)),
            v => v.as_f64().map(Some).ok_or_else(|| self.err(name, "number", idx)),
        }
    }

    /// Missing numeric slots default to zero.
    fn f64_or_zero(&self, idx: usize, name: &str) -> Result<f64> {
        Ok(self.opt_f64(idx, name)?.unwrap_or(0.0))
    }

    fn opt_str(&self, idx: usize, name: &str) -> Result<Option<String>> {
        match self.slot(idx) {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            _ => Err(self.err(name, "string", idx)),
        }
    }

    fn str(&self, idx: usize, name: &str) -> Result<String> {
        self.opt_str(idx, name)?
            .ok_or_else(|| self.err(name, "string", idx))
    }

    /// Accepts `true`/`false`, `1`/`0` and null (false).
    fn flag(&self, idx: usize, name: &str) -> Result<bool> {
        match self.slot(idx) {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(*b),
            v => v
                .as_i64()
                .map(|n| n != 0)
                .ok_or_else(|| self.err(name, "flag", idx)),
        }
    }

    fn opt_value(&self, idx: usize) -> Option<Value> {
        match self.slot(idx) {
            Value::Null => None,
            v => Some(v.clone()),
        }
    }
}

fn order_from_fields(f: &Fields<'_>) -> Result<Order> {
    Ok(Order {
        id: f.i64(0, "id")?,
        gid: f.opt_i64(1, "gid")?,
        cid: f.opt_i64(2, "cid")?,
        symbol: f.str(3, "symbol")?,
        mts_create: f.i64(4, "mts_create")?,
        mts_update: f.opt_i64(5, "mts_update")?.unwrap_or_default(),
        amount: f.f64_or_zero(6, "amount")?,
        amount_orig: f.f64_or_zero(7, "amount_orig")?,
        order_type: f.str(8, "type")?,
        type_prev: f.opt_str(9, "type_prev")?,
        mts_tif: f.opt_i64(10, "mts_tif")?,
        flags: f.opt_i64(12, "flags")?.unwrap_or_default(),
        status: f.opt_str(13, "status")?.unwrap_or_default(),
        price: f.f64_or_zero(16, "price")?,
        price_avg: f.f64_or_zero(17, "price_avg")?,
        price_trailing: f.f64_or_zero(18, "price_trailing")?,
        price_aux_limit: f.f64_or_zero(19, "price_aux_limit")?,
        notify: f.flag(23, "notify")?,
        hidden: f.flag(24, "hidden")?,
        placed_id: f.opt_i64(25, "placed_id")?,
        routing: f.opt_str(28, "routing")?,
        meta: f.opt_value(31),
    })
}

fn trade_from_fields(f: &Fields<'_>) -> Result<TradeExecutionUpdate> {
    Ok(TradeExecutionUpdate {
        id: f.i64(0, "id")?,
        symbol: f.str(1, "symbol")?,
        mts_create: f.i64(2, "mts_create")?,
        order_id: f.i64(3, "order_id")?,
        exec_amount: f.f64_or_zero(4, "exec_amount")?,
        exec_price: f.f64_or_zero(5, "exec_price")?,
        order_type: f.opt_str(6, "order_type")?,
        order_price: f.opt_f64(7, "order_price")?,
        maker: f.opt_i64(8, "maker")?.map(|m| m == 1).unwrap_or(false),
        fee: f.f64_or_zero(9, "fee")?,
        fee_currency: f.opt_str(10, "fee_currency")?.unwrap_or_default(),
        cid: f.opt_i64(11, "cid")?,
    })
}

/// `[]`/null → None, `[order...]` → one order, `[[order...], ...]` → many.
fn order_snapshot_from_value(value: &Value) -> Result<Option<OrderSnapshot>> {
    let items = match value {
        Value::Null => return Ok(None),
        Value::Array(items) => items,
        other => return Err(Error::decode("orders", format!("expected array, got {other}"))),
    };
    let Some(first) = items.first() else {
        return Ok(None);
    };
    let snapshot = if first.is_array() {
        items
            .iter()
            .map(|row| order_from_fields(&Fields::new("order", row)?))
            .collect::<Result<Vec<_>>>()?
    } else {
        vec![order_from_fields(&Fields::new("order", value)?)?]
    };
    Ok(Some(OrderSnapshot::new(snapshot)))
}

/// A nested notification is an 8-slot array whose second slot is the type string.
fn looks_like_notification(value: &Value) -> bool {
    matches!(value, Value::Array(items) if items.len() == 8 && items[1].is_string())
}

fn notify_info_from_value(value: &Value) -> Result<NotificationInfo> {
    let items = match value {
        Value::Null => return Ok(NotificationInfo::Empty),
        Value::Array(items) if items.is_empty() => return Ok(NotificationInfo::Empty),
        Value::Array(items) => items,
        other => return Ok(NotificationInfo::Raw(other.clone())),
    };
    if items.iter().all(looks_like_notification) {
        let nested = items
            .iter()
            .map(notification_from_value)
            .collect::<Result<Vec<_>>>()?;
        return Ok(NotificationInfo::Notifications(nested));
    }
    match order_snapshot_from_value(value) {
        Ok(Some(snapshot)) => Ok(NotificationInfo::Orders(snapshot)),
        Ok(None) => Ok(NotificationInfo::Empty),
        Err(_) => Ok(NotificationInfo::Raw(value.clone())),
    }
}

fn notification_from_value(value: &Value) -> Result<Notification> {
    let f = Fields::new("notification", value)?;
    Ok(Notification {
        mts: f.i64(0, "mts")?,
        notification_type: f.str(1, "type")?,
        message_id: f.opt_i64(2, "message_id")?,
        notify_info: notify_info_from_value(f.slot(4))?,
        code: f.opt_i64(5, "code")?,
        status: f.opt_str(6, "status")?.unwrap_or_default(),
        text: f.opt_str(7, "text")?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_ROW: &str = r#"[30471920432,null,1573482478000,"tBTCUSD",1573482478000,1573482478001,0.002,0.002,"EXCHANGE LIMIT",null,null,null,4096,"ACTIVE",null,null,9000.5,0,0,0,null,null,null,0,0,null,null,null,"API>BFX",null,null,{"aff_code":"xyz"}]"#;

    #[test]
    fn test_order_snapshot_from_rows() -> Result<()> {
        let raw = format!("[{ORDER_ROW},{ORDER_ROW}]");
        let snapshot = JsonCodec
            .decode_order_snapshot(raw.as_bytes())?
            .unwrap_or_default();
        assert_eq!(snapshot.len(), 2);

        let order = &snapshot.snapshot[0];
        assert_eq!(order.id, 30471920432);
        assert_eq!(order.gid, None);
        assert_eq!(order.cid, Some(1573482478000));
        assert_eq!(order.symbol, "tBTCUSD");
        assert_eq!(order.amount, 0.002);
        assert_eq!(order.order_type, "EXCHANGE LIMIT");
        assert_eq!(order.flags, 4096);
        assert_eq!(order.status, "ACTIVE");
        assert_eq!(order.price, 9000.5);
        assert!(!order.hidden);
        assert_eq!(order.routing.as_deref(), Some("API>BFX"));
        assert!(order.meta.is_some());
        Ok(())
    }

    #[test]
    fn test_empty_order_response_is_no_data() -> Result<()> {
        assert_eq!(JsonCodec.decode_order_snapshot(b"[]")?, None);
        assert_eq!(JsonCodec.decode_order_snapshot(b"")?, None);
        assert_eq!(JsonCodec.decode_order_snapshot(b"null")?, None);
        Ok(())
    }

    #[test]
    fn test_single_order_row_is_one_element_snapshot() -> Result<()> {
        let snapshot = JsonCodec.decode_order_snapshot(ORDER_ROW.as_bytes())?;
        assert_eq!(snapshot.map(|s| s.len()), Some(1));
        Ok(())
    }

    #[test]
    fn test_malformed_order_names_field() {
        let err = JsonCodec
            .decode_order_snapshot(br#"[[1,null,null,42]]"#)
            .unwrap_err();
        assert!(matches!(err, Error::Decode(ref msg) if msg.starts_with("order.symbol")));

        let err = JsonCodec.decode_order_snapshot(br#"{"id":1}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        let err = JsonCodec.decode_order_snapshot(b"[1,").unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
    }

    #[test]
    fn test_trade_snapshot() -> Result<()> {
        let raw = br#"[[402088407,"tETHUSD",1574963975602,34938060782,-0.2,153.57,"MARKET",0,-1,-0.061416,"USD",null],[402088408,"tETHUSD",1574963975603,34938060782,-0.1,153.5,null,null,1,-0.01,"USD",55]]"#;
        let trades = JsonCodec.decode_trade_snapshot(raw)?;
        assert_eq!(trades.len(), 2);
        assert_eq!(trades.snapshot[0].order_id, 34938060782);
        assert!(!trades.snapshot[0].maker);
        assert!(trades.snapshot[1].maker);
        assert_eq!(trades.snapshot[1].cid, Some(55));
        assert!((trades.total_exec_amount() + 0.3).abs() < 1e-9);

        assert!(JsonCodec.decode_trade_snapshot(b"[]")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_submit_notification_carries_orders() -> Result<()> {
        let raw = format!(r#"[1575289447641,"on-req",null,null,[{ORDER_ROW}],null,"SUCCESS","Submitting 1 orders."]"#);
        let n = JsonCodec.decode_notification(raw.as_bytes())?;
        assert_eq!(n.notification_type, "on-req");
        assert!(n.is_success());
        assert_eq!(n.orders().len(), 1);
        assert_eq!(n.text, "Submitting 1 orders.");
        Ok(())
    }

    #[test]
    fn test_single_order_notify_info() -> Result<()> {
        let raw = format!(r#"[1575289447641,"oc-req",null,null,{ORDER_ROW},null,"SUCCESS","Submitted for cancellation"]"#);
        let n = JsonCodec.decode_notification(raw.as_bytes())?;
        assert_eq!(n.orders().len(), 1);
        assert_eq!(n.orders()[0].id, 30471920432);
        Ok(())
    }

    #[test]
    fn test_multi_op_notification_nests_per_op_results() -> Result<()> {
        let raw = format!(
            r#"[1575289447641,"ox_multi-req",null,null,[[1575289447641,"on-req",null,null,[{ORDER_ROW}],null,"SUCCESS","Submitting 1 orders."],[1575289447642,"oc-req",null,null,[],null,"ERROR","Order not found."]],null,"SUCCESS","Submitting 2 order operations."]"#
        );
        let n = JsonCodec.decode_notification(raw.as_bytes())?;
        let NotificationInfo::Notifications(nested) = &n.notify_info else {
            panic!("expected nested notifications, got {:?}", n.notify_info);
        };
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].notification_type, "on-req");
        assert_eq!(nested[0].orders().len(), 1);
        assert_eq!(nested[1].status, "ERROR");
        assert_eq!(nested[1].notify_info, NotificationInfo::Empty);
        Ok(())
    }

    #[test]
    fn test_unrecognised_notify_info_is_kept_raw() -> Result<()> {
        let raw = br#"[1575289447641,"n",null,null,{"k":1},null,"SUCCESS",""]"#;
        let n = JsonCodec.decode_notification(raw)?;
        assert!(matches!(n.notify_info, NotificationInfo::Raw(_)));
        Ok(())
    }
}
