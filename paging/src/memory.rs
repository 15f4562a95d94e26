//! In-process query service
//!
//! Serves a fixed dataset through [`PageFetcher`] with the same paging
//! semantics as the remote service: `limit`/`offset` select a window of the
//! matching rows and an empty window comes back without a result list.
//! Used by tests and demos in place of the remote service.

use async_trait::async_trait;
use statement::Statement;
use std::sync::Mutex;

use crate::fetcher::{Page, PageFetcher, RemoteServiceError};

type Matcher<T> = Box<dyn Fn(&T, &Statement) -> bool + Send + Sync>;

pub struct MemoryService<T> {
    items: Vec<T>,
    matcher: Option<Matcher<T>>,
    fail_on_fetch: Option<usize>,
    requests: Mutex<Vec<Statement>>,
}

impl<T> std::fmt::Debug for MemoryService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryService")
            .field("items", &self.items.len())
            .field("has_matcher", &self.matcher.is_some())
            .field("fail_on_fetch", &self.fail_on_fetch)
            .field("fetch_count", &self.fetch_count())
            .finish()
    }
}

impl<T> MemoryService<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            matcher: None,
            fail_on_fetch: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Only serve items for which `matcher` returns true for the statement
    pub fn with_matcher<M>(mut self, matcher: M) -> Self
    where
        M: Fn(&T, &Statement) -> bool + Send + Sync + 'static,
    {
        self.matcher = Some(Box::new(matcher));
        self
    }

    /// Fail the `fetch_number`-th fetch (1-based) with a network error
    pub fn fail_on_fetch(mut self, fetch_number: usize) -> Self {
        self.fail_on_fetch = Some(fetch_number);
        self
    }

    /// Statements received so far, in arrival order
    pub fn requests(&self) -> Vec<Statement> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn requested_offsets(&self) -> Vec<u32> {
        self.requests().iter().map(Statement::offset).collect()
    }

    pub fn fetch_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl<T> PageFetcher for MemoryService<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;

    async fn fetch(&self, statement: &Statement) -> Result<Page<T>, RemoteServiceError> {
        let fetch_number = {
            let mut requests = self.requests.lock().map_err(|_| {
                RemoteServiceError::Other(anyhow::anyhow!("request log lock poisoned"))
            })?;
            requests.push(statement.clone());
            requests.len()
        };

        if self.fail_on_fetch == Some(fetch_number) {
            return Err(RemoteServiceError::Network(format!(
                "connection reset on fetch {}",
                fetch_number
            )));
        }

        let matching: Vec<&T> = self
            .items
            .iter()
            .filter(|item| self.matcher.as_ref().map_or(true, |m| m(*item, statement)))
            .collect();
        let total = u32::try_from(matching.len()).unwrap_or(u32::MAX);

        let offset = statement.offset() as usize;
        let limit = statement.limit().map_or(usize::MAX, |l| l as usize);
        let window: Vec<T> = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        tracing::trace!(offset, returned = window.len(), total, "memory service answered");

        let results = if window.is_empty() { None } else { Some(window) };
        Ok(Page::new(results, statement.offset(), total))
    }
}
