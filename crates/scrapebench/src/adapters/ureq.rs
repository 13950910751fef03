//! Adapter for the `ureq` blocking HTTP client.

use crate::adapter::{AdapterResult, LibraryAdapter};
use crate::types::{Failure, Operation};
use async_trait::async_trait;
use url::Url;

/// Blocking page retrieval via `ureq`, bridged onto the runtime with
/// `spawn_blocking` so a slow request cannot stall other benchmark tasks.
pub struct UreqAdapter;

impl UreqAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UreqAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibraryAdapter for UreqAdapter {
    fn name(&self) -> &str {
        "ureq"
    }

    fn supports(&self, operation: Operation) -> bool {
        operation == Operation::Fetch
    }

    async fn fetch(&self, url: &str) -> AdapterResult<String> {
        Url::parse(url).map_err(|e| Failure::Malformed(format!("invalid URL '{url}': {e}")))?;

        let url = url.to_string();
        let handle = tokio::task::spawn_blocking(move || -> AdapterResult<String> {
            let mut response = ureq::get(url.as_str())
                .call()
                .map_err(|e| Failure::Transient(format!("request failed: {e}")))?;

            response
                .body_mut()
                .read_to_string()
                .map_err(|e| Failure::Transient(format!("failed to read body: {e}")))
        });

        handle
            .await
            .map_err(|e| Failure::Transient(format!("fetch task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn supports_fetch_only() {
        let adapter = UreqAdapter::new();
        assert!(adapter.supports(Operation::Fetch));
        assert!(!adapter.supports(Operation::ExtractLinks));
    }

    #[tokio::test]
    async fn invalid_url_is_malformed_without_network() {
        let adapter = UreqAdapter::new();
        let result = adapter.fetch("::nope::").await;
        assert!(matches!(result, Err(Failure::Malformed(_))));
    }

    #[tokio::test]
    async fn extraction_is_unsupported() {
        let adapter = UreqAdapter::new();
        assert_eq!(
            adapter.extract_elements("<html></html>", "div", None).await,
            Err(Failure::Unsupported)
        );
    }
}
