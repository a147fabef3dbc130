//! JWK (JSON Web Key) entry of Apple's key set

use crate::algorithm::AlgorithmType;
use crate::error::{Error, Result};
use crate::limits::{MAX_JWK_ALG_SIZE, MAX_JWK_E_SIZE, MAX_JWK_KID_SIZE, MAX_JWK_N_SIZE};
use crate::utils::{base64url, der};
use miniserde::Deserialize;

/// JSON Web Key
///
/// Apple only publishes RSA signing keys, so EC members are not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Jwk {
    kty: Option<String>,
    kid: Option<String>,
    /// Advisory per RFC 7517; checked against the token algorithm when present
    alg: Option<String>,
    #[serde(rename = "use")]
    key_use: Option<String>,
    /// RSA modulus (Base64URL-encoded)
    n: Option<String>,
    /// RSA exponent (Base64URL-encoded)
    e: Option<String>,
}

impl Jwk {
    /// RSA signing key from Base64URL-encoded modulus and exponent
    pub fn rsa(kid: impl Into<String>, n: impl Into<String>, e: impl Into<String>) -> Self {
        Self {
            kty: Some("RSA".into()),
            kid: Some(kid.into()),
            alg: None,
            key_use: Some("sig".into()),
            n: Some(n.into()),
            e: Some(e.into()),
        }
    }

    /// Pin the key to one algorithm
    pub fn with_algorithm(mut self, algorithm: AlgorithmType) -> Self {
        self.alg = Some(algorithm.as_str().into());
        self
    }

    pub fn kid(&self) -> Option<&str> {
        self.kid.as_deref()
    }

    pub fn kty(&self) -> Option<&str> {
        self.kty.as_deref()
    }

    pub fn alg(&self) -> Option<&str> {
        self.alg.as_deref()
    }

    /// DER SubjectPublicKeyInfo for verifying `algorithm` signatures
    pub(crate) fn to_spki(&self, algorithm: AlgorithmType) -> Result<Vec<u8>> {
        self.validate_structure()?;
        self.validate_algorithm(algorithm)?;
        self.to_rsa_key()
    }

    /// Key type, key use, and field sizes
    fn validate_structure(&self) -> Result<()> {
        match self.kty.as_deref() {
            Some("RSA") => {}
            Some(kty) => {
                return Err(Error::KeyInvalid(format!(
                    "key type mismatch: expected RSA, found {kty}"
                )));
            }
            None => return Err(Error::KeyInvalid("missing key type (kty)".into())),
        }

        // "enc" keys must never verify signatures
        if let Some(key_use) = self.key_use.as_deref().filter(|key_use| *key_use != "sig") {
            return Err(Error::KeyInvalid(format!(
                "key use mismatch: expected 'sig', found '{key_use}'"
            )));
        }

        if let Some(alg) = &self.alg {
            check_field_size("alg", alg, MAX_JWK_ALG_SIZE)?;
        }
        if let Some(kid) = &self.kid {
            check_field_size("kid", kid, MAX_JWK_KID_SIZE)?;
        }

        Ok(())
    }

    fn validate_algorithm(&self, algorithm: AlgorithmType) -> Result<()> {
        match &self.alg {
            Some(jwk_alg) if jwk_alg != algorithm.as_str() => Err(Error::JwkAlgorithmMismatch {
                jwk_alg: jwk_alg.clone(),
                token_alg: algorithm.as_str().into(),
            }),
            _ => Ok(()),
        }
    }

    fn to_rsa_key(&self) -> Result<Vec<u8>> {
        // Base64URL: 4 chars -> 3 bytes
        const MAX_DECODED_JWK_N: usize = (MAX_JWK_N_SIZE * 3) / 4;
        const MAX_DECODED_JWK_E: usize = (MAX_JWK_E_SIZE * 3) / 4;

        let n = self
            .n
            .as_deref()
            .ok_or_else(|| Error::KeyInvalid("rsa key missing n (modulus)".into()))?;
        let e = self
            .e
            .as_deref()
            .ok_or_else(|| Error::KeyInvalid("rsa key missing e (exponent)".into()))?;

        check_field_size("n", n, MAX_JWK_N_SIZE)?;
        check_field_size("e", e, MAX_JWK_E_SIZE)?;

        let n_bytes = base64url::decode_bytes(n, MAX_DECODED_JWK_N)
            .map_err(|err| Error::KeyInvalid(format!("failed to decode n: {err}")))?;
        let e_bytes = base64url::decode_bytes(e, MAX_DECODED_JWK_E)
            .map_err(|err| Error::KeyInvalid(format!("failed to decode e: {err}")))?;

        der::rsa_spki(&n_bytes, &e_bytes)
    }
}

fn check_field_size(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::JwkFieldTooLarge {
            field: field.into(),
            size: value.len(),
            max,
        });
    }
    Ok(())
}
