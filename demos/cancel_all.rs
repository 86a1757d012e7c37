use bitfinex_rust_sdk::{
    CancelOrderMultiRequest, Credentials, HttpClient, HttpClientConfig, OrderService,
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

    let response = orders
        .cancel_multi(&CancelOrderMultiRequest::cancel_all())
        .await
        .unwrap();
    info!("Cancel all: {} ({} orders)", response.status, response.orders().len());

    let history = orders.all_history().await.unwrap();
    for order in history.iter().take(5) {
        info!("{} {} {:?}", order.id, order.symbol, order.parsed_status());
    }
}
