//! Convenience re-exports for common AdPager usage
//!
//! This prelude module re-exports the most commonly used items from the
//! AdPager crates, so one `use` statement covers a typical paging session.
//!
//! # Example
//!
//! ```rust
//! use adpager::prelude::*;
//!
//! let statement = StatementBuilder::new().limit(SUGGESTED_PAGE_LIMIT);
//! assert_eq!(statement.current_offset(), 0);
//! ```

// Core AdPager components
pub use crate::core::{AdPager, SharedFetcher};
pub use crate::errors::AdPagerError;
pub use crate::models::{
    LineItemCreativeAssociation, Product, ProductStatus,
    UpdateLineItemCreativeAssociationsResponse,
};

// Re-export centralized config
pub use config::{AppConfig, ConfigError, PagingConfig, SessionConfig};

// Statement building
pub use statement::prelude::*;

// Paging sessions
pub use paging::prelude::*;

// Session signals
pub use paging_signals::prelude::*;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use tokio;
