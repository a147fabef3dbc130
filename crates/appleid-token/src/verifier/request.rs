/// The relying party a token must have been issued to
///
/// Only the identifier takes part in verification. Team and key IDs travel
/// along so one value can describe the whole Apple registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedClient {
    identifier: String,
    team_id: Option<String>,
    key_id: Option<String>,
    redirect_uri: Option<String>,
}

impl ExpectedClient {
    /// Client with the bundle ID or services ID the token's `aud` must equal
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            team_id: None,
            key_id: None,
            redirect_uri: None,
        }
    }

    pub fn with_team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }

    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }
}

/// What the caller expects of a token
///
/// Every expectation is optional; checks for absent expectations are skipped.
/// Signature verification is on unless turned off explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    client: Option<ExpectedClient>,
    nonce: Option<String>,
    state: Option<String>,
    access_token: Option<String>,
    code: Option<String>,
    verify_signature: bool,
}

impl Default for VerificationRequest {
    fn default() -> Self {
        Self {
            client: None,
            nonce: None,
            state: None,
            access_token: None,
            code: None,
            verify_signature: true,
        }
    }
}

impl VerificationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `aud` to match the client identifier
    pub fn client(mut self, client: ExpectedClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Require `nonce` to match, on platforms that support nonces
    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Require `s_hash` to bind the token to this state value
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Require `at_hash` to bind the token to this access token
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Require `c_hash` to bind the token to this authorization code
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Turn the cryptographic signature check on or off
    pub fn verify_signature(mut self, verify: bool) -> Self {
        self.verify_signature = verify;
        self
    }

    pub fn expected_client(&self) -> Option<&ExpectedClient> {
        self.client.as_ref()
    }

    pub fn expected_nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    pub fn expected_state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn expected_access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn expected_code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn verifies_signature(&self) -> bool {
        self.verify_signature
    }
}
