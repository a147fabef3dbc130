//! Identity token verification
//!
//! Claims are always checked first and every failing claim is reported at
//! once. The signature is checked only after the claims pass, and only when
//! the request asks for it; a bad signature is reported as
//! [`Error::SignatureInvalid`], never as a claim failure.

pub(crate) mod checks;
pub(crate) mod request;

pub use checks::{Claim, FailedClaims, failed_claims};
pub use request::{ExpectedClient, VerificationRequest};

use crate::clock::{Clock, SystemClock};
use crate::codec::Token;
use crate::error::{Error, Result};
use crate::jwks::KeySet;
use crate::remote::JwksClient;
use crate::source::KeySetSource;
use std::sync::Arc;

/// Issuer of every Sign in with Apple identity token
pub const APPLE_ISSUER: &str = "https://appleid.apple.com";

/// Verifies identity tokens against caller expectations
///
/// Holds no per-token state; one verifier can be shared across tasks.
#[derive(Clone)]
pub struct Verifier<S> {
    source: S,
    clock: Arc<dyn Clock>,
    issuer: String,
}

impl<S: KeySetSource> Verifier<S> {
    /// Verifier that takes signing keys from `source`
    pub fn new(source: S) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            issuer: APPLE_ISSUER.into(),
        }
    }

    /// Replace the wall clock
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Expect a different `iss` value
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Verify a decoded token
    ///
    /// The key set is fetched only when the signature check runs; fetch
    /// errors are returned as-is.
    pub async fn verify(&self, token: &Token, request: &VerificationRequest) -> Result<()> {
        tracing::debug!(
            kid = token.key_id(),
            alg = %token.algorithm(),
            "verifying identity token"
        );

        self.verify_claims(token, request)?;

        if !request.verifies_signature() {
            tracing::debug!("signature verification disabled by request");
            return Ok(());
        }

        let keys = self.source.key_set().await?;
        verify_signature(token, &keys)
    }

    /// Decode and verify a compact token string
    pub async fn verify_str(&self, token: &str, request: &VerificationRequest) -> Result<Token> {
        let token = Token::decode(token)?;
        self.verify(&token, request).await?;
        Ok(token)
    }

    /// Run the claim checks alone
    pub fn verify_claims(&self, token: &Token, request: &VerificationRequest) -> Result<()> {
        let failed = failed_claims(token, request, &self.issuer, self.clock.now());
        if failed.is_empty() {
            return Ok(());
        }

        tracing::warn!(failed = %failed, "identity token claims verification failed");
        Err(Error::ClaimsInvalid(failed))
    }
}

impl Default for Verifier<JwksClient> {
    fn default() -> Self {
        Self::new(JwksClient::default())
    }
}

impl<S> std::fmt::Debug for Verifier<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

/// Check the token signature with the key its header names
pub fn verify_signature(token: &Token, keys: &KeySet) -> Result<()> {
    let key = keys.resolve(token.key_id(), token.algorithm())?;
    key.verify(token.signing_input(), token.signature())
        .inspect_err(|_| {
            tracing::warn!(kid = token.key_id(), "identity token signature verification failed");
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::AlgorithmType;
    use crate::claims::ClaimSet;
    use crate::clock::FixedClock;
    use crate::codec;
    use crate::header::Header;
    use crate::source::StaticKeySet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const IAT: i64 = 1700000000;

    /// Counts fetches and fails every one of them
    #[derive(Default)]
    struct FailingSource {
        calls: AtomicUsize,
    }

    impl KeySetSource for FailingSource {
        async fn key_set(&self) -> Result<KeySet> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::RemoteError("network: connection reset".into()))
        }
    }

    fn token(issuer: &str) -> Token {
        let claims = ClaimSet::new(issuer, "sub", "com.example.signin", IAT + 600, IAT);
        let header = Header::new(AlgorithmType::RS256, "TEST1");
        codec::decode(&codec::encode(&header, &claims, b"garbage")).unwrap()
    }

    #[tokio::test]
    async fn test_claim_only_mode_never_fetches_keys() {
        let verifier = Verifier::new(FailingSource::default()).clock(FixedClock(IAT));
        let request = VerificationRequest::new().verify_signature(false);

        assert!(verifier.verify(&token(APPLE_ISSUER), &request).await.is_ok());
        assert_eq!(verifier.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_claim_failure_skips_signature() {
        let verifier = Verifier::new(FailingSource::default()).clock(FixedClock(IAT));
        let result = verifier
            .verify(&token("https://unknown.example.com"), &VerificationRequest::new())
            .await;

        assert!(matches!(
            result,
            Err(Error::ClaimsInvalid(failed)) if failed.names() == ["iss"]
        ));
        assert_eq!(verifier.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_source_errors_pass_through() {
        let verifier = Verifier::new(FailingSource::default()).clock(FixedClock(IAT));
        let result = verifier
            .verify(&token(APPLE_ISSUER), &VerificationRequest::new())
            .await;

        assert_eq!(
            result,
            Err(Error::RemoteError("network: connection reset".into()))
        );
        assert_eq!(verifier.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_key_is_reported() {
        let verifier = Verifier::new(StaticKeySet::default()).clock(FixedClock(IAT));
        let result = verifier
            .verify(&token(APPLE_ISSUER), &VerificationRequest::new())
            .await;

        assert!(matches!(result, Err(Error::KeyNotFound { kid }) if kid == "TEST1"));
    }

    #[tokio::test]
    async fn test_custom_issuer() {
        let verifier = Verifier::new(StaticKeySet::default())
            .clock(FixedClock(IAT))
            .issuer("https://staging.example.com");
        let request = VerificationRequest::new().verify_signature(false);

        assert!(
            verifier
                .verify(&token("https://staging.example.com"), &request)
                .await
                .is_ok()
        );
        assert!(verifier.verify(&token(APPLE_ISSUER), &request).await.is_err());
    }

    #[tokio::test]
    async fn test_verify_str_rejects_malformed() {
        let verifier = Verifier::new(StaticKeySet::default());
        let result = verifier
            .verify_str("not-a-token", &VerificationRequest::new())
            .await;

        assert!(matches!(result, Err(Error::FormatInvalid)));
    }
}
