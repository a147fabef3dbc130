//! Where the verifier gets its key set from

use crate::error::Result;
use crate::jwks::KeySet;
use std::future::Future;
use std::sync::Arc;

/// Provides the key set used for signature verification
///
/// The verifier asks for a key set once per verification that checks the
/// signature. Errors are passed through to the caller unchanged, so retry
/// and caching policy live in the implementation.
pub trait KeySetSource: Send + Sync {
    fn key_set(&self) -> impl Future<Output = Result<KeySet>> + Send;
}

/// A key set supplied up front by the caller
#[derive(Debug, Clone, Default)]
pub struct StaticKeySet {
    keys: KeySet,
}

impl StaticKeySet {
    pub fn new(keys: impl Into<KeySet>) -> Self {
        Self { keys: keys.into() }
    }

    /// Parse a key set document held in memory
    pub fn from_json(json: &str) -> Result<Self> {
        KeySet::from_json(json).map(Self::new)
    }
}

impl KeySetSource for StaticKeySet {
    async fn key_set(&self) -> Result<KeySet> {
        Ok(self.keys.clone())
    }
}

impl<S: KeySetSource> KeySetSource for Arc<S> {
    fn key_set(&self) -> impl Future<Output = Result<KeySet>> + Send {
        self.as_ref().key_set()
    }
}
