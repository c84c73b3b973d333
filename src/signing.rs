//! Payload encoding and the SHA-1 signature scheme.
//!
//! The gateway consumes a pair of strings: `data`, the base64 encoding of
//! the JSON-serialized request parameters, and `signature`, the base64
//! SHA-1 digest of the encoded payload wrapped in the private key on both
//! sides. Both directions are covered here: sealing outgoing parameters
//! into a [`SignedPayload`] and verifying/decoding payloads the gateway
//! sends back.

use std::fmt::{Debug, Display};

use base64::{Engine, prelude::BASE64_STANDARD};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::{
    errors::Error,
    types::{AnyJson, RequestParams},
};

/// Base64 encoding of the JSON-serialized request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedData(pub String);

impl Serialize for EncodedData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EncodedData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(EncodedData(s))
    }
}

impl Display for EncodedData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base64 SHA-1 digest authenticating an encoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(pub String);

impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Signature(s))
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hashing capability used to authenticate encoded payloads.
///
/// The gateway scheme is implemented by [`Sha1Signer`]; substituting a
/// different implementation in tests keeps the encoding pipeline decoupled
/// from the concrete digest.
pub trait PayloadSigner {
    fn sign(&self, data: &EncodedData) -> Signature;
}

/// The gateway's signature scheme: base64(SHA-1(key || data || key)).
#[derive(Clone)]
pub struct Sha1Signer {
    private_key: String,
}

impl Sha1Signer {
    pub fn new(private_key: impl Into<String>) -> Self {
        Sha1Signer {
            private_key: private_key.into(),
        }
    }
}

impl Debug for Sha1Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sha1Signer {{ private_key: \"<redacted>\" }}")
    }
}

impl PayloadSigner for Sha1Signer {
    fn sign(&self, data: &EncodedData) -> Signature {
        let mut hasher = Sha1::new();
        hasher.update(self.private_key.as_bytes());
        hasher.update(data.0.as_bytes());
        hasher.update(self.private_key.as_bytes());
        Signature(BASE64_STANDARD.encode(hasher.finalize()))
    }
}

/// An encoded payload together with its signature, ready for the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedPayload {
    pub encoded_data: EncodedData,
    pub signature: Signature,
}

impl SignedPayload {
    /// Encodes and signs a parameter mapping.
    ///
    /// Pure and deterministic: the same mapping and signer always yield a
    /// byte-identical pair. The mapping is serialized as-is; required-field
    /// validation is the caller's concern.
    pub fn from_params(params: &RequestParams, signer: &impl PayloadSigner) -> Result<Self, Error> {
        let encoded_data = EncodedData::try_from(params)?;
        let signature = signer.sign(&encoded_data);
        Ok(SignedPayload {
            encoded_data,
            signature,
        })
    }

    /// Recomputes the signature and checks it against the carried one.
    pub fn verify(&self, signer: &impl PayloadSigner) -> Result<(), Error> {
        if signer.sign(&self.encoded_data) == self.signature {
            Ok(())
        } else {
            Err(Error::SignatureMismatch)
        }
    }

    /// Decodes the payload back into a parameter mapping.
    pub fn decode(&self) -> Result<RequestParams, Error> {
        RequestParams::try_from(&self.encoded_data)
    }
}

impl TryFrom<&RequestParams> for EncodedData {
    type Error = Error;

    fn try_from(params: &RequestParams) -> Result<Self, Self::Error> {
        let json = serde_json::to_string(params)?;
        Ok(EncodedData(BASE64_STANDARD.encode(json)))
    }
}

impl TryFrom<&EncodedData> for RequestParams {
    type Error = Error;

    fn try_from(data: &EncodedData) -> Result<Self, Self::Error> {
        let decoded_bytes = BASE64_STANDARD.decode(&data.0)?;
        let json_str = String::from_utf8(decoded_bytes)?;
        let value: AnyJson = serde_json::from_str(&json_str)?;
        RequestParams::try_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RequestParams {
        RequestParams::new()
            .with("version", "3")
            .with("amount", 1)
            .with("language", "en")
            .with("currency", "USD")
            .with("description", "test")
            .with("public_key", "pub1")
    }

    #[test]
    fn test_sign_matches_known_digest() {
        let payload = SignedPayload::from_params(&params(), &Sha1Signer::new("sec1")).unwrap();
        assert_eq!(
            payload.encoded_data.0,
            "eyJ2ZXJzaW9uIjoiMyIsImFtb3VudCI6MSwibGFuZ3VhZ2UiOiJlbiIsImN1cnJlbmN5IjoiVVNEIiwiZGVzY3JpcHRpb24iOiJ0ZXN0IiwicHVibGljX2tleSI6InB1YjEifQ=="
        );
        assert_eq!(payload.signature.0, "qg2251z44KszHVlLhazrexuPrf4=");
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = Sha1Signer::new("sec1");
        let first = SignedPayload::from_params(&params(), &signer).unwrap();
        let second = SignedPayload::from_params(&params(), &signer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_round_trips() {
        let original = params();
        let payload = SignedPayload::from_params(&original, &Sha1Signer::new("sec1")).unwrap();
        assert_eq!(payload.decode().unwrap(), original);
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let payload = SignedPayload::from_params(&params(), &Sha1Signer::new("sec1")).unwrap();
        assert!(payload.verify(&Sha1Signer::new("sec1")).is_ok());
        assert!(matches!(
            payload.verify(&Sha1Signer::new("sec2")),
            Err(Error::SignatureMismatch)
        ));
    }

    #[test]
    fn test_verify_rejects_tampered_data() {
        let mut payload = SignedPayload::from_params(&params(), &Sha1Signer::new("sec1")).unwrap();
        let tampered = params().with("amount", 1000);
        payload.encoded_data = EncodedData::try_from(&tampered).unwrap();
        assert!(matches!(
            payload.verify(&Sha1Signer::new("sec1")),
            Err(Error::SignatureMismatch)
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let payload = SignedPayload {
            encoded_data: EncodedData("%%%".to_string()),
            signature: Signature(String::new()),
        };
        assert!(matches!(
            payload.decode(),
            Err(Error::Base64DecodeError(_))
        ));
    }

    #[test]
    fn test_custom_signer_is_substitutable() {
        struct NullSigner;

        impl PayloadSigner for NullSigner {
            fn sign(&self, _data: &EncodedData) -> Signature {
                Signature("static".to_string())
            }
        }

        let payload = SignedPayload::from_params(&params(), &NullSigner).unwrap();
        assert_eq!(payload.signature.0, "static");
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let payload = SignedPayload {
            encoded_data: EncodedData("ZGF0YQ==".to_string()),
            signature: Signature("c2ln".to_string()),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"encodedData":"ZGF0YQ==","signature":"c2ln"}"#);
    }
}
