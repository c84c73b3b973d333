//! # LiqPay Kit
//!
//! A client SDK for the [LiqPay](https://www.liqpay.ua/) payment gateway.
//!
//! The gateway consumes signed payloads: request parameters are serialized
//! to JSON, base64-encoded, and authenticated with a base64(SHA-1) digest
//! over the merchant's private key. This crate builds those payloads and
//! either POSTs them to the gateway API or renders the hosted checkout
//! form, and verifies/decodes the callbacks the gateway sends back.
//!
//! ## Rendering a checkout form
//!
//! ```
//! use liqpay_kit::{client::LiqPay, types::RequestParams};
//!
//! let client = LiqPay::new("public_key", "private_key");
//! let params = RequestParams::new()
//!     .with("version", "3")
//!     .with("action", "pay")
//!     .with("amount", 5)
//!     .with("currency", "USD")
//!     .with("description", "Premium content access")
//!     .with("order_id", "order-1");
//!
//! let form = client.checkout_form(&params).unwrap();
//! assert!(form.contains("liqpay.ua/api/3/checkout"));
//! ```
//!
//! ## Calling the gateway API
//!
//! ```no_run
//! # async fn run() -> liqpay_kit::errors::Result<()> {
//! use liqpay_kit::{client::LiqPay, types::RequestParams};
//!
//! let client = LiqPay::new("public_key", "private_key");
//! let params = RequestParams::new()
//!     .with("version", "3")
//!     .with("action", "status")
//!     .with("amount", 5)
//!     .with("language", "en")
//!     .with("currency", "USD")
//!     .with("description", "Premium content access")
//!     .with("order_id", "order-1");
//!
//! let response = client.api("request", &params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `api-client` (default): the HTTP [`client::LiqPay::api`] operation,
//!   backed by `reqwest`.
//! - `tracing` (default): debug/warn events on request dispatch, form
//!   rendering and callback rejection.

pub mod checkout;
pub mod client;
pub mod errors;
pub mod signing;
pub mod types;
