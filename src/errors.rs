#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("required parameter \"{0}\" is missing or empty")]
    MissingParam(&'static str),

    #[error("Serde JSON error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Base64DecodeError(#[from] base64::DecodeError),

    #[error("UTF-8 decode error: {0}")]
    Utf8DecodeError(#[from] std::string::FromUtf8Error),

    #[error("decoded payload is not a JSON object")]
    NonObjectParams,

    #[error("callback signature mismatch")]
    SignatureMismatch,

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[cfg(feature = "api-client")]
    #[error("HTTP request error: {0}")]
    HttpRequestError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
