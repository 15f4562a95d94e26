//! Statement - query description layer for paged remote queries
//!
//! This crate provides the builder that accumulates a filter, ordering,
//! limit, offset and bind variables, and the immutable [`Statement`]
//! snapshot handed to the remote service.

pub mod builder;
pub mod errors;
pub mod ordering;
pub mod placeholder;
pub mod prelude;
pub mod statement;

#[cfg(test)]
mod tests;

pub use builder::StatementBuilder;
pub use errors::StatementError;
pub use ordering::SortOrder;
pub use statement::Statement;
pub use value_mapping::{BindValue, ValueError, ValueKind};

/// Page size the remote service recommends and will not exceed
pub const SUGGESTED_PAGE_LIMIT: u32 = 500;
