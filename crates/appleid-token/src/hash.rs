//! Left-half hashes binding a token to an access token, code or state
//!
//! `at_hash`, `c_hash` and `s_hash` are all computed the same way: hash the
//! ASCII value with the digest named by the token's `alg`, keep the left half
//! of the digest and Base64URL-encode it without padding.

use crate::algorithm::AlgorithmType;
use crate::utils::base64url;
use aws_lc_rs::digest;

/// Computes hash-bound claim values for one signature algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashBinder {
    algorithm: AlgorithmType,
}

impl HashBinder {
    pub fn for_algorithm(algorithm: AlgorithmType) -> Self {
        Self { algorithm }
    }

    /// The expected claim value for `value`
    pub fn digest(&self, value: &str) -> String {
        let digest = digest::digest(self.algorithm.digest_algorithm(), value.as_bytes());
        let bytes = digest.as_ref();
        base64url::encode(&bytes[..bytes.len() / 2])
    }

    /// Whether `claim` binds the token to `value`
    ///
    /// A missing claim never matches.
    pub fn matches(&self, claim: Option<&str>, value: &str) -> bool {
        claim.is_some_and(|claim| matches(claim, &self.digest(value)))
    }
}

/// Byte-exact comparison of a claim value against a computed hash
pub fn matches(claim: &str, computed: &str) -> bool {
    claim.as_bytes() == computed.as_bytes()
}
