//! Request parameter types shared across the kit.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

pub type AnyJson = serde_json::Value;

/// Parameter key the client injects its public key under.
pub const PUBLIC_KEY_PARAM: &str = "public_key";

/// Parameter key carrying the interface language.
pub const LANGUAGE_PARAM: &str = "language";

/// Parameters the gateway rejects requests without.
pub const REQUIRED_PARAMS: [&str; 5] = ["version", "amount", "language", "currency", "description"];

/// An ordered mapping of request parameters.
///
/// Key order is preserved exactly as inserted and flows into the JSON
/// serialization, so the same mapping always produces the same encoded
/// payload and signature. Arbitrary extra fields pass through unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParams(serde_json::Map<String, AnyJson>);

impl RequestParams {
    pub fn new() -> Self {
        RequestParams(serde_json::Map::new())
    }

    /// Chainable insert, for building a mapping in place.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AnyJson>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter, replacing any previous value under the same key.
    ///
    /// A replaced key keeps its original position in the mapping.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnyJson>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AnyJson> {
        self.0.get(key)
    }

    /// Whether the parameter is present with a non-empty value.
    ///
    /// Null, `false`, numeric zero and the empty string all count as unset,
    /// matching what the gateway treats as a missing field. Arrays and
    /// objects, even empty ones, count as set.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(value_is_set)
    }

    /// Checks that every required parameter is set.
    ///
    /// Fails with [`crate::errors::Error::MissingParam`] naming the first
    /// parameter that is absent or empty.
    pub fn validate(&self) -> Result<(), Error> {
        for name in REQUIRED_PARAMS {
            if !self.is_set(name) {
                return Err(Error::MissingParam(name));
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnyJson)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn value_is_set(value: &AnyJson) -> bool {
    match value {
        AnyJson::Null => false,
        AnyJson::Bool(b) => *b,
        AnyJson::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        AnyJson::String(s) => !s.is_empty(),
        AnyJson::Array(_) | AnyJson::Object(_) => true,
    }
}

impl From<serde_json::Map<String, AnyJson>> for RequestParams {
    fn from(map: serde_json::Map<String, AnyJson>) -> Self {
        RequestParams(map)
    }
}

impl FromIterator<(String, AnyJson)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (String, AnyJson)>>(iter: I) -> Self {
        RequestParams(iter.into_iter().collect())
    }
}

impl TryFrom<AnyJson> for RequestParams {
    type Error = Error;

    fn try_from(value: AnyJson) -> Result<Self, Self::Error> {
        match value {
            AnyJson::Object(map) => Ok(RequestParams(map)),
            _ => Err(Error::NonObjectParams),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn checkout_params() -> RequestParams {
        RequestParams::new()
            .with("version", "3")
            .with("amount", 1)
            .with("language", "en")
            .with("currency", "USD")
            .with("description", "test")
    }

    #[test]
    fn test_validate_accepts_complete_params() {
        assert!(checkout_params().validate().is_ok());
    }

    #[test]
    fn test_validate_names_first_missing_param() {
        let params = RequestParams::new().with("version", "3");
        match params.validate() {
            Err(Error::MissingParam(name)) => assert_eq!(name, "amount"),
            other => panic!("expected MissingParam, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_falsy_values() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            let params = checkout_params().with("amount", falsy.clone());
            match params.validate() {
                Err(Error::MissingParam("amount")) => {}
                other => panic!("expected MissingParam for {falsy:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_requires_every_field() {
        let full = checkout_params();
        for name in REQUIRED_PARAMS {
            let params: RequestParams = full
                .iter()
                .filter(|(key, _)| key.as_str() != name)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            match params.validate() {
                Err(Error::MissingParam(missing)) => assert_eq!(missing, name),
                other => panic!("expected MissingParam({name}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_map() {
        let mut map = serde_json::Map::new();
        map.insert("version".to_string(), "3".into());
        let params = RequestParams::from(map);
        assert_eq!(params.len(), 1);
        assert!(!params.is_empty());
    }

    #[test]
    fn test_try_from_rejects_non_object_json() {
        assert!(matches!(
            RequestParams::try_from(json!(["not", "an", "object"])),
            Err(Error::NonObjectParams)
        ));
    }

    #[test]
    fn test_empty_containers_count_as_set() {
        let params = checkout_params()
            .with("split_rules", json!([]))
            .with("dae", json!({}));
        assert!(params.is_set("split_rules"));
        assert!(params.is_set("dae"));
    }

    #[test]
    fn test_serialization_preserves_insertion_order() {
        let params = checkout_params().with("public_key", "pub1");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(
            json,
            r#"{"version":"3","amount":1,"language":"en","currency":"USD","description":"test","public_key":"pub1"}"#
        );
    }

    #[test]
    fn test_insert_replaces_value_in_place() {
        let mut params = checkout_params();
        params.insert("version", "7");
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.starts_with(r#"{"version":"7","amount":1"#));
    }
}
