//! Errors for appleid-token

use crate::verifier::FailedClaims;
use thiserror::Error;

/// Identity token errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid token format: expected three parts separated by '.'")]
    FormatInvalid,

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    #[error("Signature Base64URL string too large: {size} bytes (maximum: {max} bytes)")]
    SignatureB64TooLarge { size: usize, max: usize },

    #[error("Header field '{field}' too long: {length} bytes (maximum: {max} bytes)")]
    HeaderFieldTooLong {
        field: String,
        length: usize,
        max: usize,
    },

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    #[error("The 'none' algorithm is rejected for security reasons (RFC 8725)")]
    AlgorithmNoneRejected,

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Required claim '{0}' is missing")]
    ClaimMissing(String),

    #[error("Claim '{claim}' has an invalid type: expected {expected}")]
    ClaimInvalidType {
        claim: String,
        expected: &'static str,
    },

    #[error("Claim '{claim}' too long: {length} bytes (maximum: {max} bytes)")]
    ClaimStringTooLong {
        claim: String,
        length: usize,
        max: usize,
    },

    #[error("Unrecognized real_user_status value: {0}")]
    RealUserStatusInvalid(i64),

    // ============================================================================
    // Verification Errors
    // ============================================================================
    #[error("Claims verification failed at {0}")]
    ClaimsInvalid(FailedClaims),

    #[error("Signature verification failed")]
    SignatureInvalid,

    // ============================================================================
    // Key Errors
    // ============================================================================
    #[error("Key '{kid}' not found in key set")]
    KeyNotFound { kid: String },

    #[error("Multiple keys found with kid '{kid}' ({count} matches)")]
    MultipleKeysFound { kid: String, count: usize },

    #[error("Key ID (kid) required: key set contains {key_count} keys")]
    KeyIdRequired { key_count: usize },

    #[error("Invalid key material: {0}")]
    KeyInvalid(String),

    #[error(
        "JWK algorithm mismatch: JWK alg '{jwk_alg}' doesn't match token algorithm '{token_alg}'"
    )]
    JwkAlgorithmMismatch { jwk_alg: String, token_alg: String },

    #[error("JWK field '{field}' too large: {size} bytes (maximum: {max} bytes)")]
    JwkFieldTooLarge {
        field: String,
        size: usize,
        max: usize,
    },

    // ============================================================================
    // Remote Errors
    // ============================================================================
    #[error("Remote error: {0}")]
    RemoteError(String),

    #[error("Remote URL too long: {length} characters (maximum: {max} characters)")]
    RemoteUrlTooLong { length: usize, max: usize },

    #[error("Remote response too large: {size} bytes (maximum: {max} bytes)")]
    RemoteResponseTooLarge { size: usize, max: usize },

    #[error("Remote JWK set too large: {key_count} keys (maximum: {max} keys)")]
    RemoteJwkSetTooLarge { key_count: usize, max: usize },
}

impl Error {
    /// Whether the error was raised while decoding the wire format
    ///
    /// Malformed tokens are rejected before any claim or signature check runs.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::TokenTooLarge { .. }
                | Error::FormatInvalid
                | Error::FormatInvalidBase64(_)
                | Error::FormatInvalidJson(_)
                | Error::SignatureB64TooLarge { .. }
                | Error::HeaderFieldTooLong { .. }
                | Error::AlgorithmUnsupported(_)
                | Error::AlgorithmNoneRejected
                | Error::ClaimMissing(_)
                | Error::ClaimInvalidType { .. }
                | Error::ClaimStringTooLong { .. }
        )
    }
}

/// Result type alias for identity token operations
pub type Result<T> = std::result::Result<T, Error>;
