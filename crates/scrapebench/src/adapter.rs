//! The capability contract each compared library is wrapped behind.
//!
//! An adapter exposes some subset of the four operations. Operations it does
//! not implement keep the default method bodies and report
//! [`Failure::Unsupported`]; the runner consults [`LibraryAdapter::supports`]
//! during planning so such pairings are skipped rather than benchmarked.

use crate::types::{Failure, Operation, PageMetadata};
use async_trait::async_trait;
use url::Url;

/// Result type for calls across the adapter boundary.
pub type AdapterResult<T> = std::result::Result<T, Failure>;

/// Uniform interface over one concrete fetch/extraction library.
///
/// Implementations must not let any fault escape as a panic or a foreign
/// error type: every failure of the wrapped library is converted into a
/// [`Failure`]. Timeouts are enforced by the caller, not the adapter, so
/// that every implementation is cancelled by the same clock.
#[async_trait]
pub trait LibraryAdapter: Send + Sync {
    /// Unique implementation name, used in reports and for registry lookup.
    fn name(&self) -> &str;

    /// Adapter version reported alongside results.
    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Whether this implementation provides the given operation.
    fn supports(&self, operation: Operation) -> bool;

    /// Retrieve the content of `url`.
    async fn fetch(&self, _url: &str) -> AdapterResult<String> {
        Err(Failure::Unsupported)
    }

    /// Extract the page title and meta description from `html`.
    async fn extract_metadata(&self, _html: &str) -> AdapterResult<PageMetadata> {
        Err(Failure::Unsupported)
    }

    /// Extract hyperlinks from `html` as absolute http(s) URLs.
    async fn extract_links(&self, _html: &str, _base_url: &Url) -> AdapterResult<Vec<String>> {
        Err(Failure::Unsupported)
    }

    /// Extract the raw markup of elements matching `tag` and, when given,
    /// `class`.
    async fn extract_elements(
        &self,
        _html: &str,
        _tag: &str,
        _class: Option<&str>,
    ) -> AdapterResult<Vec<String>> {
        Err(Failure::Unsupported)
    }
}
