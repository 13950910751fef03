//! Adapter for the `dom_query` crate (html5ever tree + jQuery-like selections).

use crate::adapter::{AdapterResult, LibraryAdapter};
use crate::types::{Failure, Operation, PageMetadata};
use async_trait::async_trait;
use dom_query::{Document, Selection};
use url::Url;

/// Selection-based extraction via `dom_query`.
pub struct DomQueryAdapter;

impl DomQueryAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DomQueryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// `dom_query` panics on an unparseable selector, so tag and class inputs
/// are restricted to CSS identifier characters before a selector is built
/// from them.
fn validate_css_identifier(input: &str, role: &str) -> AdapterResult<()> {
    let valid = !input.is_empty()
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Failure::Malformed(format!("invalid {role} '{input}'")))
    }
}

#[async_trait]
impl LibraryAdapter for DomQueryAdapter {
    fn name(&self) -> &str {
        "dom-query"
    }

    fn supports(&self, operation: Operation) -> bool {
        matches!(
            operation,
            Operation::ExtractMetadata | Operation::ExtractLinks | Operation::ExtractElements
        )
    }

    async fn extract_metadata(&self, html: &str) -> AdapterResult<PageMetadata> {
        let document = Document::from(html);

        let title = document
            .select("title")
            .nodes()
            .first()
            .map(|node| Selection::from(node.clone()).text().to_string());

        let description = document
            .select(r#"meta[name="description"]"#)
            .nodes()
            .first()
            .and_then(|node| Selection::from(node.clone()).attr("content"))
            .map(|value| value.to_string());

        Ok(PageMetadata { title, description })
    }

    async fn extract_links(&self, html: &str, base_url: &Url) -> AdapterResult<Vec<String>> {
        let document = Document::from(html);
        let mut links = Vec::new();

        for node in document.select("a[href]").nodes() {
            let anchor = Selection::from(node.clone());
            let Some(href) = anchor.attr("href") else {
                continue;
            };
            if let Ok(mut resolved) = base_url.join(&href) {
                resolved.set_fragment(None);
                match resolved.scheme() {
                    "http" | "https" => links.push(resolved.to_string()),
                    _ => (),
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
        validate_css_identifier(tag, "tag")?;
        let css = match class {
            Some(class) => {
                validate_css_identifier(class, "class")?;
                format!("{tag}.{class}")
            }
            None => tag.to_string(),
        };

        let document = Document::from(html);
        let elements = document
            .select(&css)
            .nodes()
            .iter()
            .map(|node| Selection::from(node.clone()).html().to_string())
            .collect();

        Ok(elements)
    }
}
