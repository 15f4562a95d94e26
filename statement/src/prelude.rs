//! Convenience re-exports for common statement usage

pub use crate::builder::StatementBuilder;
pub use crate::errors::StatementError;
pub use crate::ordering::SortOrder;
pub use crate::statement::Statement;
pub use crate::SUGGESTED_PAGE_LIMIT;

pub use value_mapping::{BindValue, ValueError, ValueKind};
