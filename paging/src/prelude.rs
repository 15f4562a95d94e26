//! Convenience re-exports for common paging usage

pub use crate::driver::{PagingDriver, SessionState};
pub use crate::errors::PagingError;
pub use crate::fetcher::{Page, PageFetcher, RemoteServiceError};
pub use crate::memory::MemoryService;
pub use crate::outcome::{IndexedItem, PagingOutcome, PagingSummary};

pub use async_trait::async_trait;
pub use tokio_util::sync::CancellationToken;
