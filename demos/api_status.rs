use liqpay_kit::{client::LiqPay, types::RequestParams};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let public_key = std::env::var("LIQPAY_PUBLIC_KEY")
        .expect("Please set `LIQPAY_PUBLIC_KEY` in environment variables");
    let private_key = std::env::var("LIQPAY_PRIVATE_KEY")
        .expect("Please set `LIQPAY_PRIVATE_KEY` in environment variables");
    let order_id = std::env::var("LIQPAY_ORDER_ID")
        .expect("Please set `LIQPAY_ORDER_ID` in environment variables");

    let client = LiqPay::new(public_key, private_key);
    let params = RequestParams::new()
        .with("version", "3")
        .with("action", "status")
        .with("amount", 1)
        .with("language", "en")
        .with("currency", "USD")
        .with("description", "Order status lookup")
        .with("order_id", order_id);

    let response = client
        .api("request", &params)
        .await
        .expect("Gateway request failed");
    tracing::info!("Gateway responded with status {}", response.status());

    let body = response.text().await.expect("Failed to read response body");
    println!("{body}");
}
