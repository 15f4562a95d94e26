//! # AdPager
//!
//! Statement-driven paging for ad-management query services. A statement
//! (filter, ordering, bind variables, limit, offset) is sent to a query
//! service page by page until the whole result set has been read.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use adpager::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut pager = AdPager::new(PagingConfig::default())?;
//!
//!     let products = MemoryService::new(vec![
//!         Product::new(1, "Homepage takeover".to_string(), Some(42)),
//!         Product::new(2, "Run of site".to_string(), Some(42)),
//!     ]);
//!     pager.register_service::<Product>("ProductService".to_string(), Arc::new(products))?;
//!
//!     let statement = StatementBuilder::new()
//!         .where_clause("productTemplateId = :productTemplateId")
//!         .order_by("id ASC")
//!         .with_bind_variable_value("productTemplateId", 42_i64);
//!
//!     let outcome = pager.fetch_all::<Product>("ProductService", statement).await?;
//!     for IndexedItem { index, item } in &outcome.items {
//!         println!("{}) Product with ID {} and name '{}' was found.", index, item.id, item.name);
//!     }
//!     println!("Number of results found: {}", outcome.total_result_set_size);
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod models;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::{AdPager, SharedFetcher};
pub use crate::errors::AdPagerError;

// Re-export centralized config
pub use config::{AppConfig, PagingConfig, SessionConfig};

// Re-export member crates
pub use config;
pub use paging;
pub use paging_signals;
pub use statement;
pub use value_mapping;

// Re-export external dependencies used in public API
pub use async_trait;
