//! Signature algorithms Apple uses for identity tokens
use crate::error::{Error, Result};
use crate::limits::MAX_ALG_LENGTH;

use aws_lc_rs::digest;
use aws_lc_rs::signature::{self, UnparsedPublicKey};

/// Algorithm identifier from the token header
///
/// Apple signs with RS256. RS384 and RS512 are accepted so that hash-bound
/// claims keep working if the provider rotates to a longer digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmType {
    RS256,
    RS384,
    RS512,
}

impl AlgorithmType {
    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmType::RS256 => "RS256",
            AlgorithmType::RS384 => "RS384",
            AlgorithmType::RS512 => "RS512",
        }
    }

    /// Digest function named by the algorithm
    pub(crate) fn digest_algorithm(&self) -> &'static digest::Algorithm {
        match self {
            AlgorithmType::RS256 => &digest::SHA256,
            AlgorithmType::RS384 => &digest::SHA384,
            AlgorithmType::RS512 => &digest::SHA512,
        }
    }

    fn verification_algorithm(&self) -> &'static dyn signature::VerificationAlgorithm {
        match self {
            AlgorithmType::RS256 => &signature::RSA_PKCS1_2048_8192_SHA256,
            AlgorithmType::RS384 => &signature::RSA_PKCS1_2048_8192_SHA384,
            AlgorithmType::RS512 => &signature::RSA_PKCS1_2048_8192_SHA512,
        }
    }

    /// Verify raw signature bytes over `signing_input`
    ///
    /// `key_der` is a DER SubjectPublicKeyInfo.
    pub(crate) fn verify_signature(
        &self,
        signing_input: &[u8],
        signature: &[u8],
        key_der: &[u8],
    ) -> Result<()> {
        UnparsedPublicKey::new(self.verification_algorithm(), key_der)
            .verify(signing_input, signature)
            .map_err(|_| Error::SignatureInvalid)
    }
}

impl std::str::FromStr for AlgorithmType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() > MAX_ALG_LENGTH {
            return Err(Error::AlgorithmUnsupported(format!(
                "Algorithm string too long: {} bytes (maximum: {} bytes)",
                s.len(),
                MAX_ALG_LENGTH
            )));
        }

        match s {
            "none" => Err(Error::AlgorithmNoneRejected),
            "RS256" => Ok(AlgorithmType::RS256),
            "RS384" => Ok(AlgorithmType::RS384),
            "RS512" => Ok(AlgorithmType::RS512),
            _ => Err(Error::AlgorithmUnsupported(s.into())),
        }
    }
}

impl std::fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for AlgorithmType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
