//! Adapter for the `scraper` crate (html5ever parsing + CSS selectors).

use crate::adapter::{AdapterResult, LibraryAdapter};
use crate::types::{Failure, Operation, PageMetadata};
use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

/// CSS-selector based extraction via `scraper`.
pub struct ScraperAdapter;

impl ScraperAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScraperAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn selector(input: &str) -> AdapterResult<Selector> {
    Selector::parse(input).map_err(|e| Failure::Malformed(format!("invalid selector '{input}': {e}")))
}

#[async_trait]
impl LibraryAdapter for ScraperAdapter {
    fn name(&self) -> &str {
        "scraper"
    }

    fn supports(&self, operation: Operation) -> bool {
        matches!(
            operation,
            Operation::ExtractMetadata | Operation::ExtractLinks | Operation::ExtractElements
        )
    }

    async fn extract_metadata(&self, html: &str) -> AdapterResult<PageMetadata> {
        let document = Html::parse_document(html);

        let title_selector = selector("title")?;
        let title = document
            .select(&title_selector)
            .next()
            .map(|elem| elem.text().collect::<Vec<_>>().concat());

        let meta_selector = selector(r#"meta[name="description"]"#)?;
        let description = document
            .select(&meta_selector)
            .next()
            .and_then(|elem| elem.value().attr("content").map(|s| s.to_string()));

        Ok(PageMetadata { title, description })
    }

    async fn extract_links(&self, html: &str, base_url: &Url) -> AdapterResult<Vec<String>> {
        let document = Html::parse_document(html);
        let anchor_selector = selector("a[href]")?;
        let mut links = Vec::new();

        for element in document.select(&anchor_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if let Ok(mut resolved) = base_url.join(href) {
                // Fragments would make the same target look like two links.
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
        let document = Html::parse_document(html);
        let css = match class {
            Some(class) => format!("{tag}.{class}"),
            None => tag.to_string(),
        };
        let element_selector = selector(&css)?;

        Ok(document.select(&element_selector).map(|elem| elem.html()).collect())
    }
}
