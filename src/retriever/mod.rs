//! Label-to-knowledge-excerpt retrieval.
//!
//! Given a species label, the retriever looks up that species' curated
//! source page, fetches it once, and extracts a human-readable excerpt
//! using the source's rule, falling back to the page's body text when
//! the rule is absent or the site has drifted from its selector.
//!
//! Every expected failure — unregistered label, network trouble, a
//! page with nothing to extract — comes back *inside* the outcome as a
//! descriptive string rather than as an `Err`, so callers always have
//! something to display.

mod fetcher;
pub mod mock;
mod registry;
mod rules;

pub use fetcher::{FetchError, FetchedPage, HttpFetcher, PageFetcher};
pub use registry::{SourceEntry, SourceRegistry};
pub use rules::ExtractionRule;

use log::{debug, warn};
use scraper::{Html, Selector};

use crate::labels::ClassLabel;
use rules::element_text;

/// Outcome sentinel for labels missing from the registry.
pub const LABEL_NOT_REGISTERED: &str = "Plant not found.";

/// Outcome sentinel for pages that yield no usable content.
pub const NO_CONTENT_FOUND: &str =
    "No specific content found or the page does not contain relevant information.";

/// Retrieves human-readable species information from the registered
/// source for a label.
///
/// One outbound GET per call, no caching, no retries; retry policy
/// belongs to whatever orchestrates the pipeline.
pub struct KnowledgeRetriever<F = HttpFetcher> {
    registry: SourceRegistry,
    fetcher: F,
}

impl KnowledgeRetriever<HttpFetcher> {
    /// Retriever over the builtin source table with the production
    /// HTTP fetcher.
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            registry: SourceRegistry::builtin().clone(),
            fetcher: HttpFetcher::new()?,
        })
    }
}

impl<F: PageFetcher> KnowledgeRetriever<F> {
    /// Retriever with an explicit registry and fetcher.
    pub fn with_parts(registry: SourceRegistry, fetcher: F) -> Self {
        Self { registry, fetcher }
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Fetches knowledge excerpts for `label`.
    ///
    /// Never fails: the outcome is an ordered list of excerpts, where
    /// soft failures appear as single descriptive entries and an empty
    /// list means the matched content was genuinely empty.
    pub async fn fetch(&self, label: ClassLabel) -> Vec<String> {
        let Some(entry) = self.registry.lookup(label) else {
            debug!("No source registered for {}", label);
            return vec![LABEL_NOT_REGISTERED.to_string()];
        };

        let page = match self.fetcher.fetch_page(&entry.url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Fetch for {} failed: {}", label, e);
                return vec![format!(
                    "Failed to fetch plant information from the website: {}",
                    e
                )];
            }
        };
        if !page.is_success() {
            warn!("Source for {} answered {}", label, page.status);
            return vec![format!(
                "Failed to fetch plant information from the website. Status code: {}",
                page.status
            )];
        }

        let document = Html::parse_document(&page.body);
        if let Some(rule) = &entry.rule {
            match rule.apply(&document) {
                Some(excerpts) => return excerpts,
                None => debug!("Rule for {} matched nothing, falling back to body text", label),
            }
        }

        match body_text(&document) {
            Some(text) if !text.is_empty() => vec![text],
            _ => vec![NO_CONTENT_FOUND.to_string()],
        }
    }
}

/// Full trimmed text of `<body>`, the generic extraction of last resort.
fn body_text(document: &Html) -> Option<String> {
    let body = Selector::parse("body").ok()?;
    document.select(&body).next().map(element_text)
}
