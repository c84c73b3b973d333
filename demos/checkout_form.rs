use liqpay_kit::{client::LiqPay, types::RequestParams};

fn main() {
    let public_key = std::env::var("LIQPAY_PUBLIC_KEY")
        .expect("Please set `LIQPAY_PUBLIC_KEY` in environment variables");
    let private_key = std::env::var("LIQPAY_PRIVATE_KEY")
        .expect("Please set `LIQPAY_PRIVATE_KEY` in environment variables");

    let client = LiqPay::new(public_key, private_key);
    let params = RequestParams::new()
        .with("version", "3")
        .with("action", "pay")
        .with("amount", 5)
        .with("currency", "USD")
        .with("description", "Demo checkout")
        .with("order_id", "demo-order-1");

    let form = client
        .checkout_form(&params)
        .expect("Failed to render checkout form");
    println!("{form}");
}
