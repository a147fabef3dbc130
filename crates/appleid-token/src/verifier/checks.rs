//! Claim checks
//!
//! Every check runs; failures are collected into an ordered set so the error
//! always lists them in the same order, whichever subset failed.

use crate::claims::ClaimSet;
use crate::codec::Token;
use crate::hash::HashBinder;
use crate::verifier::request::VerificationRequest;
use std::collections::BTreeSet;

/// A claim checked during verification
///
/// Variant order is the order failures are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Claim {
    Iss,
    Aud,
    Exp,
    Iat,
    Nonce,
    SHash,
    AtHash,
    CHash,
}

impl Claim {
    /// Claim name as it appears in the token
    pub const fn name(&self) -> &'static str {
        match self {
            Claim::Iss => "iss",
            Claim::Aud => "aud",
            Claim::Exp => "exp",
            Claim::Iat => "iat",
            Claim::Nonce => "nonce",
            Claim::SHash => "s_hash",
            Claim::AtHash => "at_hash",
            Claim::CHash => "c_hash",
        }
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Claims that failed verification, in reporting order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailedClaims(BTreeSet<Claim>);

impl FailedClaims {
    pub fn contains(&self, claim: Claim) -> bool {
        self.0.contains(&claim)
    }

    pub fn iter(&self) -> impl Iterator<Item = Claim> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Claim names in reporting order
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|claim| claim.name()).collect()
    }
}

impl FromIterator<Claim> for FailedClaims {
    fn from_iter<I: IntoIterator<Item = Claim>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for FailedClaims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, claim) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(claim.name())?;
        }
        f.write_str("]")
    }
}

/// Outcome of one check; `None` when the check does not apply
type Check = (Claim, Option<bool>);

/// Evaluate every claim check against `now` and collect the failures
pub fn failed_claims(
    token: &Token,
    request: &VerificationRequest,
    issuer: &str,
    now: i64,
) -> FailedClaims {
    let claims = token.claims();
    let binder = HashBinder::for_algorithm(token.algorithm());

    let checks: [Check; 8] = [
        (Claim::Iss, Some(claims.issuer() == issuer)),
        (
            Claim::Aud,
            request
                .expected_client()
                .map(|client| claims.audience() == client.identifier()),
        ),
        (Claim::Exp, Some(claims.expires_at() > now)),
        (Claim::Iat, Some(claims.issued_at() <= now)),
        (Claim::Nonce, nonce_check(claims, request)),
        (
            Claim::SHash,
            request
                .expected_state()
                .map(|state| binder.matches(claims.s_hash(), state)),
        ),
        (
            Claim::AtHash,
            request
                .expected_access_token()
                .map(|access_token| binder.matches(claims.at_hash(), access_token)),
        ),
        (
            Claim::CHash,
            request
                .expected_code()
                .map(|code| binder.matches(claims.c_hash(), code)),
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(claim, passed)| (passed == Some(false)).then_some(claim))
        .collect()
}

/// Platforms without nonce support never carry one, so nothing to compare
fn nonce_check(claims: &ClaimSet, request: &VerificationRequest) -> Option<bool> {
    if !claims.nonce_supported() {
        return None;
    }
    request
        .expected_nonce()
        .map(|expected| claims.nonce() == Some(expected))
}
