//! Paging event types and definitions
//!
//! This module defines the structure of the events a paging session
//! reports while it moves from its first fetch to completion.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Paging event type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    SessionStarted,
    PageFetched,
    SessionCompleted,
    SessionFailed,
    SessionCancelled,
}

/// Paging event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingEvent {
    /// Session the event belongs to
    pub session_id: Uuid,
    /// Event type
    pub event_type: EventType,
    /// Statement offset at the time of the event
    pub offset: u32,
    /// Fetches completed so far
    pub fetch_count: u32,
    /// Latest total reported by the service (0 until known)
    pub total_result_set_size: u32,
    /// Items in the fetched page, for `PageFetched`
    pub item_count: Option<u32>,
    /// Error description, for `SessionFailed`
    pub error: Option<String>,
    /// Event timestamp (UTC)
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl PagingEvent {
    pub fn new(session_id: Uuid, event_type: EventType) -> Self {
        Self {
            session_id,
            event_type,
            offset: 0,
            fetch_count: 0,
            total_result_set_size: 0,
            item_count: None,
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn with_progress(mut self, offset: u32, fetch_count: u32, total_result_set_size: u32) -> Self {
        self.offset = offset;
        self.fetch_count = fetch_count;
        self.total_result_set_size = total_result_set_size;
        self
    }

    pub fn with_item_count(mut self, item_count: u32) -> Self {
        self.item_count = Some(item_count);
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    /// Whether this event ends its session
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.event_type,
            EventType::SessionCompleted | EventType::SessionFailed | EventType::SessionCancelled
        )
    }
}
