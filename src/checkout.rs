//! Hosted checkout form rendering.

use std::fmt::Display;

use bon::Builder;
use url::Url;

use crate::signing::{EncodedData, Signature};

/// Path of the hosted checkout endpoint, relative to the gateway host.
pub const CHECKOUT_PATH: &str = "3/checkout";

/// An HTML `<form>` redirecting the payer to the hosted checkout page.
///
/// Renders through [`Display`]; embed the output directly in a page. The
/// form carries the encoded payload and signature as hidden inputs and
/// submits via an image button localized to `language`.
#[derive(Builder, Debug, Clone)]
pub struct CheckoutForm {
    /// Absolute URL the form posts to.
    pub action: Url,
    /// Base64 JSON payload, rendered as the hidden `data` input.
    pub encoded_data: EncodedData,
    /// Payload signature, rendered as the hidden `signature` input.
    pub signature: Signature,
    /// Two-letter language code selecting the submit button image.
    #[builder(into)]
    pub language: String,
}

impl Display for CheckoutForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"<form method="POST" action="{}" accept-charset="utf-8">"#,
            self.action
        )?;
        write!(
            f,
            r#"<input type="hidden" name="data" value="{}" />"#,
            self.encoded_data
        )?;
        write!(
            f,
            r#"<input type="hidden" name="signature" value="{}" />"#,
            self.signature
        )?;
        write!(
            f,
            r#"<input type="image" src="//static.liqpay.ua/buttons/p1{}.radius.png" name="btn_text" alt="button"/>"#,
            self.language
        )?;
        write!(f, "</form>")
    }
}
