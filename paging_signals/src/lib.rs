//! Signal system for paging session events
//!
//! This crate provides the event records a paging session emits and the
//! manager that fans them out to registered callbacks.

pub mod event;
pub mod manager;
pub mod prelude;

pub use event::{EventType, PagingEvent};
pub use manager::{EventCallback, SignalManager};
