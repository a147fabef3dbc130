//! Apple's JSON Web Key Set and key resolution
pub(crate) mod jwk;

use crate::algorithm::AlgorithmType;
use crate::error::{Error, Result};
use crate::jwks::jwk::Jwk;
use crate::limits::MAX_JWK_SET_SIZE;
use miniserde::Deserialize;

/// Wire form of a key set document
#[derive(Deserialize)]
struct JwkSetDocument {
    keys: Vec<Jwk>,
}

/// Key set published by the provider
///
/// Obtained from a [`KeySetSource`](crate::KeySetSource); this type performs
/// no I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    keys: Vec<Jwk>,
}

impl KeySet {
    pub fn new(keys: Vec<Jwk>) -> Self {
        Self { keys }
    }

    /// Parse a `{"keys": [...]}` document
    pub fn from_json(json: &str) -> Result<Self> {
        let document: JwkSetDocument = miniserde::json::from_str(json)
            .map_err(|_| Error::RemoteError("jwks: invalid jwks json".to_string()))?;

        if document.keys.len() > MAX_JWK_SET_SIZE {
            return Err(Error::RemoteJwkSetTooLarge {
                key_count: document.keys.len(),
                max: MAX_JWK_SET_SIZE,
            });
        }

        Ok(Self::new(document.keys))
    }

    pub fn keys(&self) -> &[Jwk] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Find the entry for `kid`
    ///
    /// Without a `kid` the set must hold exactly one key. Duplicate `kid`
    /// entries are ambiguous and rejected.
    pub fn find(&self, kid: Option<&str>) -> Result<&Jwk> {
        let Some(kid) = kid else {
            return match self.keys.as_slice() {
                [only] => {
                    tracing::debug!("token has no kid, using the only key in the set");
                    Ok(only)
                }
                keys => Err(Error::KeyIdRequired {
                    key_count: keys.len(),
                }),
            };
        };

        let mut matches = self.keys.iter().filter(|key| key.kid() == Some(kid));
        match (matches.next(), matches.count()) {
            (None, _) => Err(Error::KeyNotFound { kid: kid.into() }),
            (Some(key), 0) => Ok(key),
            (Some(_), others) => Err(Error::MultipleKeysFound {
                kid: kid.into(),
                count: others + 1,
            }),
        }
    }

    /// Resolve a verifiable key for `kid` and the token's algorithm
    pub fn resolve(&self, kid: Option<&str>, algorithm: AlgorithmType) -> Result<PublicKey> {
        let jwk = self.find(kid)?;
        Ok(PublicKey {
            key_id: jwk.kid().map(str::to_owned),
            algorithm,
            der: jwk.to_spki(algorithm)?,
        })
    }
}

impl From<Vec<Jwk>> for KeySet {
    fn from(keys: Vec<Jwk>) -> Self {
        Self::new(keys)
    }
}

/// RSA public key ready for signature verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    key_id: Option<String>,
    algorithm: AlgorithmType,
    der: Vec<u8>,
}

impl PublicKey {
    /// Wrap a DER SubjectPublicKeyInfo
    pub fn from_der(algorithm: AlgorithmType, der: impl Into<Vec<u8>>) -> Self {
        Self {
            key_id: None,
            algorithm,
            der: der.into(),
        }
    }

    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    pub fn algorithm(&self) -> AlgorithmType {
        self.algorithm
    }

    /// DER SubjectPublicKeyInfo bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// Verify `signature` over `signing_input`
    pub fn verify(&self, signing_input: &[u8], signature: &[u8]) -> Result<()> {
        self.algorithm
            .verify_signature(signing_input, signature, &self.der)
    }
}
