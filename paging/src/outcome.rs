//! Aggregated results of a paging session

use serde::{Deserialize, Serialize};

/// Item together with its position in the full result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedItem<T> {
    pub index: u32,
    pub item: T,
}

/// Everything a completed session retrieved
#[derive(Debug, Clone, PartialEq)]
pub struct PagingOutcome<T> {
    pub items: Vec<IndexedItem<T>>,
    pub total_result_set_size: u32,
    pub fetch_count: u32,
}

impl<T> PagingOutcome<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop the indices and keep the items in retrieval order
    pub fn into_items(self) -> Vec<T> {
        self.items.into_iter().map(|indexed| indexed.item).collect()
    }
}

/// Counters of a session whose items were streamed to a callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingSummary {
    pub total_result_set_size: u32,
    pub fetch_count: u32,
    pub items_seen: u64,
}
