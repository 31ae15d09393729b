//! Canned-page fetcher for tests.
//!
//! Useful for exercising the retriever without making real network
//! calls: responses are configured per URL and every fetch is recorded
//! so tests can assert on call counts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::fetcher::{FetchError, FetchedPage, PageFetcher};

/// A `PageFetcher` serving canned responses.
///
/// URLs without a configured response fail with a connection error,
/// which is also how transport failures are simulated.
#[derive(Default)]
pub struct MockFetcher {
    /// Canned pages indexed by URL
    pages: Arc<RwLock<HashMap<String, FetchedPage>>>,
    /// Track requested URLs for verification
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a canned response for `url` (builder pattern).
    pub fn with_page(self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(
            url.into(),
            FetchedPage {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Get the number of fetches performed so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Get the URLs that were requested, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Clear all recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_page(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.calls.write().unwrap().push(url.to_string());

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Connection(format!("no canned response for {}", url)))
    }
}
