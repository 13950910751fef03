//! Adapter for the `tl` crate (zero-allocation HTML parser).
//!
//! `tl`'s selector support is narrower than a full CSS engine, so metadata
//! and class filtering walk the matched nodes and inspect attributes
//! directly.

use crate::adapter::{AdapterResult, LibraryAdapter};
use crate::types::{Failure, Operation, PageMetadata};
use async_trait::async_trait;
use tl::ParserOptions;
use url::Url;

/// Extraction via `tl`.
pub struct TlAdapter;

impl TlAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TlAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn parse(html: &str) -> AdapterResult<tl::VDom<'_>> {
    tl::parse(html, ParserOptions::default())
        .map_err(|e| Failure::Malformed(format!("parse failed: {e}")))
}

#[async_trait]
impl LibraryAdapter for TlAdapter {
    fn name(&self) -> &str {
        "tl"
    }

    fn supports(&self, operation: Operation) -> bool {
        matches!(
            operation,
            Operation::ExtractMetadata | Operation::ExtractLinks | Operation::ExtractElements
        )
    }

    async fn extract_metadata(&self, html: &str) -> AdapterResult<PageMetadata> {
        let dom = parse(html)?;
        let parser = dom.parser();

        let title = dom
            .query_selector("title")
            .and_then(|mut matches| matches.next())
            .and_then(|handle| handle.get(parser))
            .and_then(|node| node.as_tag())
            .map(|tag| tag.inner_text(parser).into_owned());

        let mut description = None;
        if let Some(metas) = dom.query_selector("meta") {
            for handle in metas {
                let Some(meta) = handle.get(parser).and_then(|node| node.as_tag()) else {
                    continue;
                };
                let attributes = meta.attributes();
                let is_description = attributes
                    .get("name")
                    .flatten()
                    .is_some_and(|value| value.as_utf8_str() == "description");
                if is_description {
                    description = attributes
                        .get("content")
                        .flatten()
                        .map(|value| value.as_utf8_str().into_owned());
                    break;
                }
            }
        }

        Ok(PageMetadata { title, description })
    }

    async fn extract_links(&self, html: &str, base_url: &Url) -> AdapterResult<Vec<String>> {
        let dom = parse(html)?;
        let parser = dom.parser();
        let mut links = Vec::new();

        if let Some(anchors) = dom.query_selector("a") {
            for handle in anchors {
                let Some(anchor) = handle.get(parser).and_then(|node| node.as_tag()) else {
                    continue;
                };
                let Some(Some(href)) = anchor.attributes().get("href") else {
                    continue;
                };
                if let Ok(mut resolved) = base_url.join(&href.as_utf8_str()) {
                    resolved.set_fragment(None);
                    match resolved.scheme() {
                        "http" | "https" => links.push(resolved.to_string()),
                        _ => (),
                    }
                }
            }
        }

        Ok(links)
    }

    async fn extract_elements(
        &self,
        html: &str,
        tag: &str,
        class: Option<&str>,
    ) -> AdapterResult<Vec<String>> {
        let dom = parse(html)?;
        let parser = dom.parser();
        let mut elements = Vec::new();

        let Some(matches) = dom.query_selector(tag) else {
            return Err(Failure::Malformed(format!("invalid tag selector '{tag}'")));
        };
        for handle in matches {
            let Some(element) = handle.get(parser).and_then(|node| node.as_tag()) else {
                continue;
            };
            if let Some(class) = class {
                if !element.attributes().is_class_member(class) {
                    continue;
                }
            }
            elements.push(element.raw().as_utf8_str().into_owned());
        }

        Ok(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html>
<head>
    <title>Front Page</title>
    <meta name="viewport" content="width=device-width">
    <meta name="description" content="All the news.">
</head>
<body>
    <a href="story.html#latest">Story</a>
    <a href="https://other.example.org/a">Offsite</a>
    <a href="javascript:void(0)">Widget</a>
    <div class="teaser">One</div>
    <div class="teaser extra">Two</div>
    <div class="footer">Three</div>
</body>
</html>"#;

    #[tokio::test]
    async fn extracts_title_and_description() {
        let adapter = TlAdapter::new();
        let meta = adapter.extract_metadata(PAGE).await.unwrap();
        assert_eq!(meta.title.as_deref(), Some("Front Page"));
        assert_eq!(meta.description.as_deref(), Some("All the news."));
    }

    #[tokio::test]
    async fn resolves_and_filters_links() {
        let adapter = TlAdapter::new();
        let base = Url::parse("https://news.example.com/today/").unwrap();
        let links = adapter.extract_links(PAGE, &base).await.unwrap();

        assert_eq!(
            links,
            vec![
                "https://news.example.com/today/story.html".to_string(),
                "https://other.example.org/a".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn extracts_elements_by_tag_and_class() {
        let adapter = TlAdapter::new();

        let teasers = adapter.extract_elements(PAGE, "div", Some("teaser")).await.unwrap();
        assert_eq!(teasers.len(), 2);
        assert!(teasers[1].contains("Two"));

        let all_divs = adapter.extract_elements(PAGE, "div", None).await.unwrap();
        assert_eq!(all_divs.len(), 3);
    }

    #[tokio::test]
    async fn fetch_is_unsupported() {
        let adapter = TlAdapter::new();
        assert!(!adapter.supports(Operation::Fetch));
        assert_eq!(adapter.fetch("https://example.com/").await, Err(Failure::Unsupported));
    }
}
