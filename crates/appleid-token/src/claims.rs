//! Claim set carried by an Apple identity token
//!
//! Known claims are parsed once into typed fields; the full decoded map is kept
//! alongside so that unknown claims survive a decode/encode round trip.
//!
//! Apple is inconsistent about boolean claims: `email_verified` and
//! `is_private_email` arrive as the strings `"true"`/`"false"` on some tokens
//! and as JSON booleans on others. [`parse_lax_boolean`] is the only place
//! that rule lives.

use crate::error::{Error, Result};
use crate::real_user_status::RealUserStatus;
use crate::utils::bounds::validate_claim_string;
use miniserde::json::{self, Number, Object, Value};

/// Interpret a boolean claim that may be encoded as a JSON boolean or string
///
/// Only `true` and `"true"` are true. A missing claim is false.
pub fn parse_lax_boolean(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

/// Typed view over a decoded claim set
#[derive(Clone)]
pub struct ClaimSet {
    issuer: String,
    subject: String,
    audience: String,
    expires_at: i64,
    issued_at: i64,
    nonce: Option<String>,
    auth_time: Option<i64>,
    email: Option<String>,
    email_verified: bool,
    is_private_email: bool,
    nonce_supported: bool,
    real_user_status: Option<i64>,
    at_hash: Option<String>,
    c_hash: Option<String>,
    s_hash: Option<String>,
    transfer_sub: Option<String>,
    org_id: Option<String>,
    raw: Object,
}

impl ClaimSet {
    /// Build a claim set from the claims every identity token carries
    pub fn new(
        issuer: impl Into<String>,
        subject: impl Into<String>,
        audience: impl Into<String>,
        expires_at: i64,
        issued_at: i64,
    ) -> Self {
        let mut claims = Self {
            issuer: issuer.into(),
            subject: subject.into(),
            audience: audience.into(),
            expires_at,
            issued_at,
            nonce: None,
            auth_time: None,
            email: None,
            email_verified: false,
            is_private_email: false,
            nonce_supported: false,
            real_user_status: None,
            at_hash: None,
            c_hash: None,
            s_hash: None,
            transfer_sub: None,
            org_id: None,
            raw: Object::new(),
        };
        claims.put("iss", Value::String(claims.issuer.clone()));
        claims.put("sub", Value::String(claims.subject.clone()));
        claims.put("aud", Value::String(claims.audience.clone()));
        claims.put("exp", integer(expires_at));
        claims.put("iat", integer(issued_at));
        claims
    }

    /// Parse a decoded claim map
    ///
    /// Fails if a required claim is missing or a known claim has the wrong
    /// JSON type. Unknown claims are kept as-is.
    pub fn from_object(raw: Object) -> Result<Self> {
        Ok(Self {
            issuer: required("iss", string_claim(&raw, "iss")?)?,
            subject: required("sub", string_claim(&raw, "sub")?)?,
            audience: required("aud", string_claim(&raw, "aud")?)?,
            expires_at: required("exp", integer_claim(&raw, "exp")?)?,
            issued_at: required("iat", integer_claim(&raw, "iat")?)?,
            nonce: string_claim(&raw, "nonce")?,
            auth_time: integer_claim(&raw, "auth_time")?,
            email: string_claim(&raw, "email")?,
            email_verified: parse_lax_boolean(raw.get("email_verified")),
            is_private_email: parse_lax_boolean(raw.get("is_private_email")),
            nonce_supported: parse_lax_boolean(raw.get("nonce_supported")),
            real_user_status: integer_claim(&raw, "real_user_status")?,
            at_hash: string_claim(&raw, "at_hash")?,
            c_hash: string_claim(&raw, "c_hash")?,
            s_hash: string_claim(&raw, "s_hash")?,
            transfer_sub: string_claim(&raw, "transfer_sub")?,
            org_id: string_claim(&raw, "org_id")?,
            raw,
        })
    }

    /// Parse decoded claim set JSON
    pub(crate) fn from_json(claims_json: &str) -> Result<Self> {
        let raw: Object = json::from_str(claims_json)
            .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse claims: {e}")))?;
        Self::from_object(raw)
    }

    pub(crate) fn to_json(&self) -> String {
        json::to_string(&self.raw)
    }

    /// The full claim map, including claims without a typed accessor
    pub fn to_object(&self) -> Object {
        self.raw.clone()
    }

    /// Look up any claim by name
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Stable user identifier, unique per developer team
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Client ID (bundle ID or services ID) the token was issued for
    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    pub fn issued_at(&self) -> i64 {
        self.issued_at
    }

    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    pub fn auth_time(&self) -> Option<i64> {
        self.auth_time
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    /// Whether `email` is an Apple private relay address
    pub fn is_private_email(&self) -> bool {
        self.is_private_email
    }

    /// Whether the platform that issued the token supports nonces
    ///
    /// When false, the nonce check is skipped during verification.
    pub fn nonce_supported(&self) -> bool {
        self.nonce_supported
    }

    /// Apple's real-user indicator
    ///
    /// Returns `Ok(None)` when the claim is absent and an error for any value
    /// outside the known range.
    pub fn real_user_status(&self) -> Result<Option<RealUserStatus>> {
        self.real_user_status
            .map(RealUserStatus::try_from)
            .transpose()
    }

    pub fn at_hash(&self) -> Option<&str> {
        self.at_hash.as_deref()
    }

    pub fn c_hash(&self) -> Option<&str> {
        self.c_hash.as_deref()
    }

    pub fn s_hash(&self) -> Option<&str> {
        self.s_hash.as_deref()
    }

    /// Subject from before an app transfer between teams
    pub fn transfer_sub(&self) -> Option<&str> {
        self.transfer_sub.as_deref()
    }

    pub fn org_id(&self) -> Option<&str> {
        self.org_id.as_deref()
    }

    // ============================================================================
    // Builders
    // ============================================================================

    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        let nonce = nonce.into();
        self.put("nonce", Value::String(nonce.clone()));
        self.nonce = Some(nonce);
        self
    }

    pub fn with_auth_time(mut self, auth_time: i64) -> Self {
        self.put("auth_time", integer(auth_time));
        self.auth_time = Some(auth_time);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.put("email", Value::String(email.clone()));
        self.email = Some(email);
        self
    }

    pub fn with_email_verified(mut self, verified: bool) -> Self {
        self.put("email_verified", Value::Bool(verified));
        self.email_verified = verified;
        self
    }

    pub fn with_private_email(mut self, private: bool) -> Self {
        self.put("is_private_email", Value::Bool(private));
        self.is_private_email = private;
        self
    }

    pub fn with_nonce_supported(mut self, supported: bool) -> Self {
        self.put("nonce_supported", Value::Bool(supported));
        self.nonce_supported = supported;
        self
    }

    pub fn with_real_user_status(mut self, status: RealUserStatus) -> Self {
        self.put("real_user_status", integer(status.as_i64()));
        self.real_user_status = Some(status.as_i64());
        self
    }

    pub fn with_at_hash(mut self, at_hash: impl Into<String>) -> Self {
        let at_hash = at_hash.into();
        self.put("at_hash", Value::String(at_hash.clone()));
        self.at_hash = Some(at_hash);
        self
    }

    pub fn with_c_hash(mut self, c_hash: impl Into<String>) -> Self {
        let c_hash = c_hash.into();
        self.put("c_hash", Value::String(c_hash.clone()));
        self.c_hash = Some(c_hash);
        self
    }

    pub fn with_s_hash(mut self, s_hash: impl Into<String>) -> Self {
        let s_hash = s_hash.into();
        self.put("s_hash", Value::String(s_hash.clone()));
        self.s_hash = Some(s_hash);
        self
    }

    pub fn with_transfer_sub(mut self, transfer_sub: impl Into<String>) -> Self {
        let transfer_sub = transfer_sub.into();
        self.put("transfer_sub", Value::String(transfer_sub.clone()));
        self.transfer_sub = Some(transfer_sub);
        self
    }

    pub fn with_org_id(mut self, org_id: impl Into<String>) -> Self {
        let org_id = org_id.into();
        self.put("org_id", Value::String(org_id.clone()));
        self.org_id = Some(org_id);
        self
    }

    fn put(&mut self, name: &str, value: Value) {
        self.raw.insert(name.to_owned(), value);
    }
}

impl PartialEq for ClaimSet {
    fn eq(&self, other: &Self) -> bool {
        self.to_json() == other.to_json()
    }
}

impl std::fmt::Debug for ClaimSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimSet")
            .field("issuer", &self.issuer)
            .field("subject", &self.subject)
            .field("audience", &self.audience)
            .field("expires_at", &self.expires_at)
            .field("issued_at", &self.issued_at)
            .field("nonce_supported", &self.nonce_supported)
            .finish_non_exhaustive()
    }
}

fn integer(value: i64) -> Value {
    Value::Number(Number::I64(value))
}

fn required<T>(name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::ClaimMissing(name.into()))
}

fn invalid_type(name: &str, expected: &'static str) -> Error {
    Error::ClaimInvalidType {
        claim: name.into(),
        expected,
    }
}

fn string_claim(raw: &Object, name: &str) -> Result<Option<String>> {
    match raw.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => {
            validate_claim_string(name, value)?;
            Ok(Some(value.clone()))
        }
        Some(_) => Err(invalid_type(name, "string")),
    }
}

fn integer_claim(raw: &Object, name: &str) -> Result<Option<i64>> {
    match raw.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(Number::I64(value))) => Ok(Some(*value)),
        Some(Value::Number(Number::U64(value))) => i64::try_from(*value)
            .map(Some)
            .map_err(|_| invalid_type(name, "integer")),
        Some(_) => Err(invalid_type(name, "integer")),
    }
}
