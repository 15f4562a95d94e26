//! Paging - statement-driven retrieval of large result sets
//!
//! A [`PagingDriver`] renders a statement, hands it to a [`PageFetcher`],
//! advances the offset by the page size and repeats until the offset
//! reaches the total result set size reported by the service.

pub mod driver;
pub mod errors;
pub mod fetcher;
pub mod memory;
pub mod outcome;
pub mod prelude;


pub use driver::{PagingDriver, SessionState};
pub use errors::PagingError;
pub use fetcher::{Page, PageFetcher, RemoteServiceError};
pub use memory::MemoryService;
pub use outcome::{IndexedItem, PagingOutcome, PagingSummary};
