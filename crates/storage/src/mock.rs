//! Mock URL Signer Implementation
//!
//! Produces deterministic URLs and records every signed key so tests can
//! assert how often the provider was consulted.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{validate_key, StorageError, UrlSigner, DEFAULT_URL_TTL_SECS};

/// Base URL used by mock-signed links
pub const MOCK_BASE_URL: &str = "https://storage.mock.carebridge.local";

/// Mock signer for testing and local development
#[derive(Debug, Clone)]
pub struct MockUrlSigner {
    ttl: Duration,
    signed: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MockUrlSigner {
    /// Create a new mock signer with the default TTL
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(DEFAULT_URL_TTL_SECS))
    }

    /// Create a new mock signer with a custom TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            signed: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A signer whose every call fails, for exercising error paths
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Keys signed so far, in call order
    pub fn signed_keys(&self) -> Vec<String> {
        self.signed
            .lock()
            .map(|keys| keys.clone())
            .unwrap_or_default()
    }

    /// Number of signing calls so far
    pub fn call_count(&self) -> usize {
        self.signed.lock().map(|keys| keys.len()).unwrap_or(0)
    }
}

impl Default for MockUrlSigner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UrlSigner for MockUrlSigner {
    async fn sign(&self, file_key: &str) -> Result<String, StorageError> {
        validate_key(file_key)?;

        if let Ok(mut keys) = self.signed.lock() {
            keys.push(file_key.to_string());
        }

        if self.fail {
            return Err(StorageError::Signing(format!(
                "mock signer configured to fail for {}",
                file_key
            )));
        }

        tracing::debug!(file_key, "Mock signing file key");
        Ok(format!(
            "{}/{}?expires={}",
            MOCK_BASE_URL,
            file_key.trim_start_matches('/'),
            self.ttl.as_secs()
        ))
    }

    fn url_ttl(&self) -> Duration {
        self.ttl
    }
}
