//! Remote query service boundary
//!
//! The paging core only knows the remote service through [`PageFetcher`]:
//! one statement in, one page out. Transport, authentication, wire encoding
//! and retries all live behind this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use statement::Statement;
use std::sync::Arc;
use thiserror::Error;

use crate::outcome::IndexedItem;

/// Failure reported by the remote service or its transport
#[derive(Error, Debug)]
pub enum RemoteServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Query rejected: {0}")]
    Query(String),

    #[error("Quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items in this page; `None` when the service returned no result list
    pub results: Option<Vec<T>>,
    /// Position of the first item in the full result set
    pub start_index: u32,
    /// Count of all items matching the filter, independent of paging
    pub total_result_set_size: u32,
}

impl<T> Page<T> {
    pub fn new(results: Option<Vec<T>>, start_index: u32, total_result_set_size: u32) -> Self {
        Self {
            results,
            start_index,
            total_result_set_size,
        }
    }

    /// Page with no result list, as returned for an empty result set
    pub fn empty() -> Self {
        Self::new(None, 0, 0)
    }

    pub fn has_results(&self) -> bool {
        self.results.is_some()
    }

    pub fn items(&self) -> &[T] {
        self.results.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Items paired with their position in the full result set
    pub fn indexed(&self) -> impl Iterator<Item = (u32, &T)> {
        let start = self.start_index;
        self.items()
            .iter()
            .enumerate()
            .map(move |(i, item)| (start.saturating_add(i as u32), item))
    }

    pub fn into_indexed(self) -> impl Iterator<Item = IndexedItem<T>> {
        let start = self.start_index;
        self.results
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(move |(i, item)| IndexedItem {
                index: start.saturating_add(i as u32),
                item,
            })
    }
}

/// Remote query service that answers a statement with one page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    type Item: Send;

    async fn fetch(&self, statement: &Statement) -> Result<Page<Self::Item>, RemoteServiceError>;
}

#[async_trait]
impl<F> PageFetcher for Arc<F>
where
    F: PageFetcher + ?Sized,
{
    type Item = F::Item;

    async fn fetch(&self, statement: &Statement) -> Result<Page<Self::Item>, RemoteServiceError> {
        (**self).fetch(statement).await
    }
}
