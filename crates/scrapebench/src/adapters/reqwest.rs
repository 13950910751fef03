//! Adapter for the `reqwest` asynchronous HTTP client.

use crate::adapter::{AdapterResult, LibraryAdapter};
use crate::types::{Failure, Operation};
use async_trait::async_trait;
use url::Url;

/// Asynchronous page retrieval via `reqwest`.
///
/// The client is built once and reused so connection pooling behaves the
/// way it would in a real consumer of the library. No client-level timeout
/// is set; the runner applies the configured per-call timeout uniformly
/// across all fetch implementations.
pub struct ReqwestAdapter {
    client: reqwest::Client,
}

impl ReqwestAdapter {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibraryAdapter for ReqwestAdapter {
    fn name(&self) -> &str {
        "reqwest"
    }

    fn supports(&self, operation: Operation) -> bool {
        operation == Operation::Fetch
    }

    async fn fetch(&self, url: &str) -> AdapterResult<String> {
        let url = Url::parse(url).map_err(|e| Failure::Malformed(format!("invalid URL '{url}': {e}")))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Failure::Transient(format!("request failed: {e}")))?;

        let response = response
            .error_for_status()
            .map_err(|e| Failure::Transient(format!("error status: {e}")))?;

        response
            .text()
            .await
            .map_err(|e| Failure::Transient(format!("failed to read body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn supports_fetch_only() {
        let adapter = ReqwestAdapter::new();
        assert!(adapter.supports(Operation::Fetch));
        assert!(!adapter.supports(Operation::ExtractMetadata));
        assert!(!adapter.supports(Operation::ExtractLinks));
        assert!(!adapter.supports(Operation::ExtractElements));
    }

    #[tokio::test]
    async fn invalid_url_is_malformed_without_network() {
        let adapter = ReqwestAdapter::new();
        let result = adapter.fetch("not a url").await;
        assert!(matches!(result, Err(Failure::Malformed(_))));
    }

    #[tokio::test]
    async fn extraction_is_unsupported() {
        let adapter = ReqwestAdapter::new();
        assert_eq!(
            adapter.extract_metadata("<html></html>").await,
            Err(Failure::Unsupported)
        );
    }
}
