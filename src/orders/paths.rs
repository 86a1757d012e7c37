use crate::helpers::join_path;

pub(crate) const ORDER_SUBMIT: &str = "order/submit";
pub(crate) const ORDER_UPDATE: &str = "order/update";
pub(crate) const ORDER_CANCEL: &str = "order/cancel";
pub(crate) const ORDER_CANCEL_MULTI: &str = "order/cancel/multi";
pub(crate) const ORDER_MULTI: &str = "order/multi";

/// `orders/{symbol}`, or `orders` for every symbol.
pub(crate) fn active_orders(symbol: &str) -> String {
    join_path(&["orders", symbol])
}

/// `orders/{symbol}/hist`, or `orders/hist` for every symbol.
pub(crate) fn historical_orders(symbol: &str) -> String {
    join_path(&["orders", symbol, "hist"])
}

/// `order/{symbol}:{order_id}/trades`
pub(crate) fn order_trades(symbol: &str, order_id: i64) -> String {
    let key = format!("{symbol}:{order_id}");
    join_path(&["order", &key, "trades"])
}
