//! Sample corpus loading and management.
//!
//! The corpus is the fixed set of inputs shared by every implementation
//! under comparison. It is loaded once per run and read-only afterwards;
//! the per-operation views returned by [`SampleCorpus::samples_for`] depend
//! on the operation alone, never on the implementation, so no adapter can
//! see a smaller or easier input set than its competitors.
//!
//! ## Corpus file format
//!
//! ```json
//! {
//!   "samples": [
//!     { "id": "homepage", "url": "https://example.com/" },
//!     {
//!       "id": "article",
//!       "html": "<html>...</html>",
//!       "base_url": "https://example.com/articles/",
//!       "tag": "p",
//!       "class": "text"
//!     }
//!   ]
//! }
//! ```

use crate::types::Operation;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use url::Url;

fn default_base_url() -> String {
    "https://example.com/".to_string()
}

/// One benchmark input.
///
/// Fetch operations draw on `url`; extraction operations draw on `html`.
/// A sample may carry both. `tag`/`class` parameterize the
/// extract-elements operation for this sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Stable identifier, referenced by measurements
    pub id: String,

    /// URL retrieved by fetch operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Raw HTML consumed by extraction operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Base URL hyperlinks are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Element tag for extract-elements (defaults to "div")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Element class filter for extract-elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl Sample {
    /// Tag targeted by extract-elements for this sample.
    pub fn element_tag(&self) -> &str {
        self.tag.as_deref().unwrap_or("div")
    }

    /// Class filter targeted by extract-elements for this sample.
    pub fn element_class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::InvalidSample {
                id: "<unnamed>".to_string(),
                reason: "sample id cannot be empty".to_string(),
            });
        }

        if self.url.is_none() && self.html.is_none() {
            return Err(Error::InvalidSample {
                id: self.id.clone(),
                reason: "sample must provide a url, html content, or both".to_string(),
            });
        }

        if let Err(e) = Url::parse(&self.base_url) {
            return Err(Error::InvalidSample {
                id: self.id.clone(),
                reason: format!("invalid base_url '{}': {}", self.base_url, e),
            });
        }

        Ok(())
    }
}

/// The fixed, ordered input set shared by all compared implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleCorpus {
    samples: Vec<Sample>,
}

impl SampleCorpus {
    /// Build a corpus from explicit samples, validating each one.
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self> {
        let corpus = Self { samples };
        corpus.validate()?;
        Ok(corpus)
    }

    /// Load a corpus from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::CorpusNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let corpus: SampleCorpus = serde_json::from_str(&contents)?;
        corpus.validate()?;
        Ok(corpus)
    }

    /// The built-in corpus: a small hand-written article page, a large
    /// generated document, and one fetch target.
    pub fn builtin() -> Self {
        let samples = vec![
            Sample {
                id: "article".to_string(),
                url: None,
                html: Some(ARTICLE_HTML.to_string()),
                base_url: "https://example.com/articles/".to_string(),
                tag: Some("p".to_string()),
                class: Some("text".to_string()),
            },
            Sample {
                id: "generated".to_string(),
                url: None,
                html: Some(generate_document(25, 40, "target")),
                base_url: default_base_url(),
                tag: Some("div".to_string()),
                class: Some("target".to_string()),
            },
            Sample {
                id: "example-homepage".to_string(),
                url: Some("https://example.com/".to_string()),
                html: None,
                base_url: default_base_url(),
                tag: None,
                class: None,
            },
        ];

        // The built-in samples are static; a validation failure here is a
        // bug in this module, not a runtime condition.
        debug_assert!(samples.iter().all(|s| s.validate().is_ok()));
        Self { samples }
    }

    fn validate(&self) -> Result<()> {
        if self.samples.is_empty() {
            return Err(Error::Config("sample corpus is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for sample in &self.samples {
            sample.validate()?;
            if !seen.insert(sample.id.as_str()) {
                return Err(Error::InvalidSample {
                    id: sample.id.clone(),
                    reason: "duplicate sample id".to_string(),
                });
            }
        }

        Ok(())
    }

    /// All samples, in corpus order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The ordered view of samples applicable to `operation`.
    ///
    /// Fetch draws URL samples; extraction operations draw HTML samples.
    /// The view is a function of the operation alone, which is what keeps
    /// the input set identical across implementations.
    pub fn samples_for(&self, operation: Operation) -> Vec<&Sample> {
        self.samples
            .iter()
            .filter(|sample| match operation {
                Operation::Fetch => sample.url.is_some(),
                Operation::ExtractMetadata | Operation::ExtractLinks | Operation::ExtractElements => {
                    sample.html.is_some()
                }
            })
            .collect()
    }

    /// Get count of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Generate a large HTML document with `num_sections` sections of
/// `divs_per_section` divs each; every 10th div carries `target_class`,
/// the rest carry a decoy class.
pub fn generate_document(num_sections: usize, divs_per_section: usize, target_class: &str) -> String {
    let mut html = String::from("<html><head><title>Test Document</title></head><body>\n");

    for section in 0..num_sections {
        html.push_str(&format!("<section id='section-{section}'>\n"));
        for div in 0..divs_per_section {
            let class = if div % 10 == 0 { target_class } else { "other" };
            html.push_str(&format!("<div class='{class}'>Content {section}-{div}</div>\n"));
        }
        html.push_str("</section>\n");
    }

    html.push_str("</body></html>\n");
    html
}

const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Sample Article</title>
    <meta name="description" content="A small article page used as a shared benchmark input.">
</head>
<body>
<nav>
    <ul>
        <li><a href="/">Home</a></li>
        <li><a href="/about">About</a></li>
    </ul>
</nav>
<main>
    <div class="container">
        <h1>Sample Article Title</h1>
        <p class="text">Hello World!</p>
        <p class="text">Another paragraph with a <a href="deep/page.html#section">relative link</a>.</p>
        <div class="container">
            <span class="highlight">Highlighted Text</span>
        </div>
        <a href="https://example.com/other" class="link">Example Link</a>
        <a href="mailto:editor@example.com">Contact</a>
        <a href="javascript:void(0)">Widget</a>
    </div>
</main>
<footer>
    <p>&copy; 2025 Example Corp. All rights reserved.</p>
</footer>
</body>
</html>
"#;
