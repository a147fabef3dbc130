//! Fetching Apple's key set over HTTP

use crate::error::{Error, Result};
use crate::jwks::KeySet;
use crate::limits::MAX_JWKS_RESPONSE_SIZE;
use crate::source::KeySetSource;
use crate::url::validate_jwks_uri;
use std::time::Duration;

/// Apple's published key set endpoint
pub const APPLE_JWKS_URI: &str = "https://appleid.apple.com/auth/keys";

/// Fetches the key set with one GET per call
///
/// Nothing is cached. Wrap the client, or hand the verifier a
/// [`StaticKeySet`](crate::StaticKeySet), to reuse keys between verifications.
#[derive(Debug, Clone)]
pub struct JwksClient {
    client: reqwest::Client,
    uri: String,
    timeout: Option<Duration>,
}

impl JwksClient {
    /// Client for Apple's endpoint with no request timeout
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            uri: APPLE_JWKS_URI.into(),
            timeout: None,
        }
    }

    /// Fetch from a different endpoint
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Abort the request after `timeout`
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fetch and parse the key set
    pub async fn fetch(&self) -> Result<KeySet> {
        let uri = validate_jwks_uri(&self.uri)?;

        tracing::debug!(uri = %uri, "fetching key set");

        let mut request = self.client.get(uri);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::RemoteError(format!("network: {e}")))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "key set request failed");
            return Err(Error::RemoteError(format!(
                "http: status {}",
                response.status()
            )));
        }

        if let Some(length) = response.content_length() {
            let size = usize::try_from(length).unwrap_or(usize::MAX);
            if size > MAX_JWKS_RESPONSE_SIZE {
                return Err(Error::RemoteResponseTooLarge {
                    size,
                    max: MAX_JWKS_RESPONSE_SIZE,
                });
            }
        }

        // Chunked responses carry no length up front
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::RemoteError(format!("network: {e}")))?;

        if bytes.len() > MAX_JWKS_RESPONSE_SIZE {
            return Err(Error::RemoteResponseTooLarge {
                size: bytes.len(),
                max: MAX_JWKS_RESPONSE_SIZE,
            });
        }

        let body = std::str::from_utf8(&bytes)
            .map_err(|e| Error::RemoteError(format!("jwks: utf8 decode failed: {e}")))?;

        KeySet::from_json(body)
    }
}

impl Default for JwksClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl KeySetSource for JwksClient {
    async fn key_set(&self) -> Result<KeySet> {
        self.fetch().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn client_for(server: &mockito::Server) -> JwksClient {
        JwksClient::default().uri(format!("{}/auth/keys", server.url()))
    }

    #[tokio::test]
    async fn test_fetch_key_set() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/auth/keys")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"keys":[{"kty":"RSA","kid":"W6WcOKB","use":"sig","alg":"RS256","n":"AQAB","e":"AQAB"}]}"#)
            .create_async()
            .await;

        let keys = client_for(&server).fetch().await.expect("key set");
        assert_eq!(keys.len(), 1);
        assert_eq!(keys.keys()[0].kid(), Some("W6WcOKB"));
    }

    #[tokio::test]
    async fn test_fetch_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/auth/keys")
            .with_status(503)
            .create_async()
            .await;

        let result = client_for(&server).fetch().await;
        assert!(matches!(result, Err(Error::RemoteError(msg)) if msg.contains("503")));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/auth/keys")
            .with_status(200)
            .with_body("{ invalid json }")
            .create_async()
            .await;

        let result = client_for(&server).fetch().await;
        assert!(
            matches!(result, Err(Error::RemoteError(msg)) if msg.contains("invalid jwks json"))
        );
    }

    #[tokio::test]
    async fn test_fetch_oversized_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/auth/keys")
            .with_status(200)
            .with_body("a".repeat(MAX_JWKS_RESPONSE_SIZE + 1))
            .create_async()
            .await;

        let result = client_for(&server).fetch().await;
        assert!(matches!(
            result,
            Err(Error::RemoteResponseTooLarge { size, max })
                if size == MAX_JWKS_RESPONSE_SIZE + 1 && max == MAX_JWKS_RESPONSE_SIZE
        ));
    }

    #[tokio::test]
    async fn test_fetch_oversized_chunked_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/auth/keys")
            .with_status(200)
            .with_chunked_body(|w| w.write_all(&vec![b'a'; MAX_JWKS_RESPONSE_SIZE + 1]))
            .create_async()
            .await;

        let result = client_for(&server).fetch().await;
        assert!(matches!(
            result,
            Err(Error::RemoteResponseTooLarge { size, .. }) if size == MAX_JWKS_RESPONSE_SIZE + 1
        ));
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_uri() {
        let result = JwksClient::default().uri("").fetch().await;
        assert!(
            matches!(result, Err(Error::RemoteError(msg)) if msg.contains("cannot be empty"))
        );
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host() {
        let result = JwksClient::default()
            .uri("http://127.0.0.1:9/auth/keys")
            .timeout(Duration::from_secs(2))
            .fetch()
            .await;
        assert!(matches!(result, Err(Error::RemoteError(msg)) if msg.starts_with("network")));
    }
}
