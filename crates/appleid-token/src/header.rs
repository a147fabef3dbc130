use crate::algorithm::AlgorithmType;
use crate::error::{Error, Result};
use crate::limits::{MAX_ALG_LENGTH, MAX_KID_LENGTH};
use crate::utils::bounds::validate_header_field;
use miniserde::json::{Object, Value};
use miniserde::{Deserialize, json};

/// Header as it appears on the wire
#[derive(Debug, Clone, Deserialize)]
struct RawHeader {
    #[serde(rename = "alg")]
    algorithm: String,

    #[serde(rename = "kid")]
    key_id: Option<String>,
}

/// Token header
///
/// Carries the signature algorithm and the key ID used to pick a key out of
/// Apple's published key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    algorithm: AlgorithmType,
    key_id: Option<String>,
}

impl Header {
    pub fn new(algorithm: AlgorithmType, key_id: impl Into<String>) -> Self {
        Self {
            algorithm,
            key_id: Some(key_id.into()),
        }
    }

    /// Header without a key ID
    pub fn without_key_id(algorithm: AlgorithmType) -> Self {
        Self {
            algorithm,
            key_id: None,
        }
    }

    pub fn algorithm(&self) -> AlgorithmType {
        self.algorithm
    }

    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// Parse decoded header JSON
    pub(crate) fn from_json(header_json: &str) -> Result<Self> {
        let raw: RawHeader = json::from_str(header_json)
            .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse header: {e}")))?;

        validate_header_field("alg", &raw.algorithm, MAX_ALG_LENGTH)?;
        if let Some(kid) = &raw.key_id {
            validate_header_field("kid", kid, MAX_KID_LENGTH)?;
        }

        Ok(Self {
            algorithm: raw.algorithm.parse()?,
            key_id: raw.key_id,
        })
    }

    pub(crate) fn to_json(&self) -> String {
        let mut object = Object::new();
        if let Some(kid) = &self.key_id {
            object.insert("kid".into(), Value::String(kid.clone()));
        }
        object.insert("alg".into(), Value::String(self.algorithm.as_str().into()));
        json::to_string(&object)
    }
}
