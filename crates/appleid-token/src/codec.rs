//! Compact serialization: `header.claims.signature`
//!
//! Decoding keeps the exact `header.claims` bytes as they arrived. Signature
//! checks run over those bytes, never over re-serialized JSON.

use crate::algorithm::AlgorithmType;
use crate::claims::ClaimSet;
use crate::error::{Error, Result};
use crate::header::Header;
use crate::limits::{
    MAX_DECODED_CLAIMS_SIZE, MAX_DECODED_HEADER_SIZE, MAX_DECODED_SIGNATURE_SIZE,
    MAX_SIGNATURE_B64_SIZE, MAX_TOKEN_LENGTH,
};
use crate::utils::base64url;

/// Decoded identity token
///
/// Decoding succeeds regardless of whether the signature is valid; only
/// [`Verifier`](crate::Verifier) reports that.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    header: Header,
    claims: ClaimSet,
    signature: Vec<u8>,
    signing_input: String,
    raw: String,
}

impl Token {
    /// Decode a compact token string
    pub fn decode(token: &str) -> Result<Self> {
        decode(token)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    pub fn algorithm(&self) -> AlgorithmType {
        self.header.algorithm()
    }

    pub fn key_id(&self) -> Option<&str> {
        self.header.key_id()
    }

    /// Raw signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// The `header.claims` segment bytes the signature covers
    pub fn signing_input(&self) -> &[u8] {
        self.signing_input.as_bytes()
    }

    /// The original token string
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::str::FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Decode a compact token into header, claims and signature
pub fn decode(token: &str) -> Result<Token> {
    if token.len() > MAX_TOKEN_LENGTH {
        return Err(Error::TokenTooLarge {
            size: token.len(),
            max: MAX_TOKEN_LENGTH,
        });
    }

    let mut parts = token.split('.');
    let header_b64 = parts.next().ok_or(Error::FormatInvalid)?;
    let claims_b64 = parts.next().ok_or(Error::FormatInvalid)?;
    let signature_b64 = parts.next().ok_or(Error::FormatInvalid)?;
    if parts.next().is_some() {
        return Err(Error::FormatInvalid);
    }

    if signature_b64.len() > MAX_SIGNATURE_B64_SIZE {
        return Err(Error::SignatureB64TooLarge {
            size: signature_b64.len(),
            max: MAX_SIGNATURE_B64_SIZE,
        });
    }

    let header_json = base64url::decode_string(header_b64, MAX_DECODED_HEADER_SIZE)?;
    let header = Header::from_json(&header_json)?;

    let claims_json = base64url::decode_string(claims_b64, MAX_DECODED_CLAIMS_SIZE)?;
    let claims = ClaimSet::from_json(&claims_json)?;

    let signature = base64url::decode_bytes(signature_b64, MAX_DECODED_SIGNATURE_SIZE)?;

    Ok(Token {
        header,
        claims,
        signature,
        signing_input: format!("{header_b64}.{claims_b64}"),
        raw: token.to_owned(),
    })
}

/// Serialize header and claims into the compact form
///
/// The signature is attached as given; nothing is signed here.
pub fn encode(header: &Header, claims: &ClaimSet, signature: &[u8]) -> String {
    format!(
        "{}.{}.{}",
        base64url::encode(header.to_json()),
        base64url::encode(claims.to_json()),
        base64url::encode(signature)
    )
}
