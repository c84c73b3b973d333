//! The gateway client: credentials, signing pipeline, API calls and
//! checkout form rendering.

#[cfg(feature = "api-client")]
use http::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::{
    checkout::{CHECKOUT_PATH, CheckoutForm},
    errors::Result,
    signing::{EncodedData, PayloadSigner, Sha1Signer, Signature, SignedPayload},
    types::{AnyJson, LANGUAGE_PARAM, PUBLIC_KEY_PARAM, RequestParams},
};

/// Default gateway origin all paths are resolved against.
pub const DEFAULT_HOST: &str = "https://www.liqpay.ua/api/";

/// Language the checkout form falls back to when the caller supplies none.
pub const DEFAULT_LANGUAGE: &str = "ru";

/// A LiqPay gateway client.
///
/// Holds the merchant's public key and the payload signer built from the
/// private key. Both are read-only after construction, so one instance can
/// be shared freely across concurrent calls.
///
/// Every operation works on a copy of the caller's parameter mapping: the
/// public key is injected into the copy and the original is never mutated,
/// so a mapping can be reused across calls.
#[derive(Debug, Clone)]
pub struct LiqPay<S: PayloadSigner = Sha1Signer> {
    pub public_key: String,
    pub signer: S,
    pub host: Url,
    pub default_language: String,
    #[cfg(feature = "api-client")]
    pub http_client: reqwest::Client,
    #[cfg(feature = "api-client")]
    pub api_headers: HeaderMap,
}

impl LiqPay {
    /// Creates a client from the merchant's public and private keys.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        LiqPay::with_signer(public_key, Sha1Signer::new(private_key))
    }
}

impl<S: PayloadSigner> LiqPay<S> {
    /// Creates a client with a custom payload signer.
    pub fn with_signer(public_key: impl Into<String>, signer: S) -> Self {
        LiqPay {
            public_key: public_key.into(),
            signer,
            host: Url::parse(DEFAULT_HOST).expect("default gateway host is a valid URL"),
            default_language: DEFAULT_LANGUAGE.to_string(),
            #[cfg(feature = "api-client")]
            http_client: reqwest::Client::new(),
            #[cfg(feature = "api-client")]
            api_headers: HeaderMap::new(),
        }
    }

    /// Overrides the gateway origin, e.g. for a sandbox environment.
    pub fn host(mut self, host: Url) -> Self {
        self.host = host;
        self
    }

    /// Overrides the fallback language used by [`Self::checkout_form`].
    pub fn default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    #[cfg(feature = "api-client")]
    pub fn header(mut self, key: &HeaderName, value: &HeaderValue) -> Self {
        self.api_headers.insert(key, value.to_owned());
        self
    }

    #[cfg(feature = "api-client")]
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// Signs a parameter mapping for the gateway.
    ///
    /// Copies the mapping, overwrites `public_key` with the client's key,
    /// validates the required parameters and seals the result into a
    /// [`SignedPayload`]. Deterministic for identical input mappings.
    pub fn sign(&self, params: &RequestParams) -> Result<SignedPayload> {
        let merged = self.merged_params(params);
        merged.validate()?;
        SignedPayload::from_params(&merged, &self.signer)
    }

    /// Calls a gateway API endpoint.
    ///
    /// The signed payload is POSTed as a JSON body carrying `encodedData`
    /// and `signature` fields to `host` joined with `path` (for example
    /// `"request"`). Exactly one outbound call is made; the response body
    /// is returned uninterpreted.
    ///
    /// Validation and serialization failures abort before anything is sent;
    /// transport failures and non-success statuses surface as
    /// [`crate::errors::Error::HttpRequestError`], so callers can tell a
    /// rejected request from a dispatched one that failed.
    #[cfg(feature = "api-client")]
    pub async fn api(&self, path: &str, params: &RequestParams) -> Result<reqwest::Response> {
        let payload = self.sign(params)?;
        let url = self.host.join(path)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Dispatching gateway API request to '{}'", url);

        let response = self
            .http_client
            .post(url)
            .headers(self.api_headers.clone())
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(response)
    }

    /// Renders the hosted checkout form for a parameter mapping.
    ///
    /// Follows the same inject/validate/sign pipeline as [`Self::api`] but
    /// performs no network call. When the caller omits `language` (or
    /// supplies an empty one), the client's default language is inserted
    /// into the copied mapping before validation runs, so the fallback is
    /// part of the signed payload and matches the submit button image.
    pub fn checkout_form(&self, params: &RequestParams) -> Result<String> {
        let mut merged = self.merged_params(params);
        if !merged.is_set(LANGUAGE_PARAM) {
            merged.insert(LANGUAGE_PARAM, self.default_language.as_str());
        }
        merged.validate()?;

        let language = merged
            .get(LANGUAGE_PARAM)
            .and_then(AnyJson::as_str)
            .unwrap_or(&self.default_language)
            .to_string();

        #[cfg(feature = "tracing")]
        tracing::debug!("Rendering checkout form for language '{}'", language);

        let payload = SignedPayload::from_params(&merged, &self.signer)?;
        let form = CheckoutForm::builder()
            .action(self.host.join(CHECKOUT_PATH)?)
            .encoded_data(payload.encoded_data)
            .signature(payload.signature)
            .language(language)
            .build();

        Ok(form.to_string())
    }

    /// Verifies and decodes a `data`/`signature` pair sent by the gateway,
    /// e.g. a server-to-server payment status callback.
    pub fn verify_callback(&self, data: &str, signature: &str) -> Result<RequestParams> {
        let payload = SignedPayload {
            encoded_data: EncodedData(data.to_string()),
            signature: Signature(signature.to_string()),
        };

        if let Err(err) = payload.verify(&self.signer) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejecting gateway callback: {err}");
            return Err(err);
        }

        payload.decode()
    }

    fn merged_params(&self, params: &RequestParams) -> RequestParams {
        let mut merged = params.clone();
        merged.insert(PUBLIC_KEY_PARAM, self.public_key.as_str());
        merged
    }
}
