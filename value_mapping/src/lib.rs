//! Typed bind-variable values for statement queries
//! This crate provides the value kinds a placeholder can be bound to and the
//! checks the remote service applies to them.

pub mod types;
pub mod validate;

pub use types::{BindValue, ValueKind};
pub use validate::ValueError;
