//! Convenience re-exports for common paging-signals usage

pub use crate::event::{EventType, PagingEvent};
pub use crate::manager::{EventCallback, SignalManager};
