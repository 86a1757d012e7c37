use bitfinex_rust_sdk::{
    Credentials, HttpClient, HttpClientConfig, NotificationInfo, OrderNewRequest, OrderOp,
    OrderService, OrderUpdateRequest,
};
use log::info;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let credentials = Credentials::from_env("BFX_API_KEY", "BFX_API_SECRET")
        .expect("BFX_API_KEY and BFX_API_SECRET must be set in environment or .env file");
    let http_client = HttpClient::new(credentials, HttpClientConfig::default()).unwrap();
    let orders = OrderService::with_http_client(http_client);

    let active = orders.get_by_symbol("tTESTBTC:TESTUSD").await.unwrap();
    info!("{} active orders", active.len());

    // Move the first resting order, place a new one and cancel the rest, in that order
    let mut ops = Vec::new();
    let mut resting = active.iter();
    if let Some(first) = resting.next() {
        ops.push(OrderOp::update_order(&OrderUpdateRequest {
            id: first.id,
            price: Some(first.price * 0.99),
            ..Default::default()
        }));
    }
    ops.push(OrderOp::new_order(&OrderNewRequest {
        order_type: "EXCHANGE LIMIT".to_string(),
        symbol: "tTESTBTC:TESTUSD".to_string(),
        amount: 0.0001,
        price: 10000.0,
        post_only: true,
        ..Default::default()
    }));
    let rest: Vec<i64> = resting.map(|o| o.id).collect();
    if !rest.is_empty() {
        ops.push(OrderOp::cancel_many(rest));
    }

    let response = orders.submit_ops(ops).await.unwrap();
    info!("Multi-op status: {} {}", response.status, response.text);
    if let NotificationInfo::Notifications(results) = &response.notify_info {
        for result in results {
            info!("  {} -> {} {}", result.notification_type, result.status, result.text);
        }
    }
}
