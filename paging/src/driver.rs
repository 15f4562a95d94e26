//! Paging session driver
//!
//! The driver is a two-state machine. While `Fetching`, each step renders the
//! current statement, fetches one page, records the total the service
//! reported and advances the offset by the page size. Once the offset
//! reaches the total the session is `Done`. The total is only known after a
//! response, so at least one fetch always happens.
//!
//! If the service reports a different total part-way through (rows written
//! while the session runs) the latest value wins. Items may then be skipped
//! or seen twice; the driver does not try to reconcile this.

use paging_signals::{EventType, PagingEvent, SignalManager};
use statement::{StatementBuilder, SUGGESTED_PAGE_LIMIT};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::errors::PagingError;
use crate::fetcher::{Page, PageFetcher};
use crate::outcome::{PagingOutcome, PagingSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Fetching,
    Done,
}

/// Drives one paging session against a [`PageFetcher`]
pub struct PagingDriver<F: PageFetcher> {
    fetcher: F,
    builder: StatementBuilder,
    page_size: u32,
    state: SessionState,
    total_result_set_size: u32,
    fetch_count: u32,
    session_id: Uuid,
    cancellation: Option<CancellationToken>,
    signal_manager: Option<Arc<SignalManager>>,
}

impl<F: PageFetcher> std::fmt::Debug for PagingDriver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagingDriver")
            .field("session_id", &self.session_id)
            .field("state", &self.state)
            .field("page_size", &self.page_size)
            .field("offset", &self.builder.current_offset())
            .field("total_result_set_size", &self.total_result_set_size)
            .field("fetch_count", &self.fetch_count)
            .field("has_signals", &self.signal_manager.is_some())
            .finish()
    }
}

impl<F: PageFetcher> PagingDriver<F> {
    /// Create a driver whose page size may not exceed [`SUGGESTED_PAGE_LIMIT`]
    pub fn new(fetcher: F, builder: StatementBuilder, page_size: u32) -> Result<Self, PagingError> {
        Self::with_max_page_size(fetcher, builder, page_size, SUGGESTED_PAGE_LIMIT)
    }

    /// Create a driver with an explicit page size ceiling.
    ///
    /// The builder's limit is set to `page_size` and its offset reset to 0.
    pub fn with_max_page_size(
        fetcher: F,
        builder: StatementBuilder,
        page_size: u32,
        max_page_size: u32,
    ) -> Result<Self, PagingError> {
        if page_size == 0 || page_size > max_page_size {
            return Err(PagingError::InvalidPageSize {
                size: page_size,
                max: max_page_size,
            });
        }

        Ok(Self {
            fetcher,
            builder: builder.limit(page_size).offset(0),
            page_size,
            state: SessionState::Fetching,
            total_result_set_size: 0,
            fetch_count: 0,
            session_id: Uuid::new_v4(),
            cancellation: None,
            signal_manager: None,
        })
    }

    /// Check `token` before every fetch
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn with_signals(mut self, signal_manager: Arc<SignalManager>) -> Self {
        self.signal_manager = Some(signal_manager);
        self
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn current_offset(&self) -> u32 {
        self.builder.current_offset()
    }

    /// Latest total reported by the service, 0 until a page with results arrives
    pub fn total_result_set_size(&self) -> u32 {
        self.total_result_set_size
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetch_count
    }

    /// Perform one `Fetching` step and return the page it fetched.
    ///
    /// Returns `Ok(None)` once the session is `Done`. Any error also ends
    /// the session; no further fetches happen after it.
    pub async fn next_page(&mut self) -> Result<Option<Page<F::Item>>, PagingError> {
        if self.state == SessionState::Done {
            return Ok(None);
        }

        if self.fetch_count == 0 {
            tracing::debug!(
                session_id = %self.session_id,
                page_size = self.page_size,
                "starting paging session"
            );
            self.emit(EventType::SessionStarted);
        }

        if self.is_cancelled() {
            tracing::debug!(session_id = %self.session_id, fetches = self.fetch_count, "paging session cancelled");
            self.state = SessionState::Done;
            self.emit(EventType::SessionCancelled);
            return Err(PagingError::Cancelled);
        }

        let statement = match self.builder.to_statement() {
            Ok(statement) => statement,
            Err(e) => return Err(self.fail(e.into())),
        };

        tracing::trace!(session_id = %self.session_id, query = %statement, "fetching page");
        let page = match self.fetcher.fetch(&statement).await {
            Ok(page) => page,
            Err(e) => return Err(self.fail(e.into())),
        };
        self.fetch_count += 1;

        if page.has_results() {
            if self.fetch_count > 1 && page.total_result_set_size != self.total_result_set_size {
                tracing::warn!(
                    session_id = %self.session_id,
                    previous = self.total_result_set_size,
                    current = page.total_result_set_size,
                    "total result set size changed during paging session"
                );
            }
            self.total_result_set_size = page.total_result_set_size;
        }

        self.builder.increase_offset_by(self.page_size);

        if let Some(signals) = &self.signal_manager {
            signals.emit(
                self.event(EventType::PageFetched)
                    .with_item_count(u32::try_from(page.len()).unwrap_or(u32::MAX)),
            );
        }

        if self.builder.current_offset() >= self.total_result_set_size {
            tracing::debug!(
                session_id = %self.session_id,
                fetches = self.fetch_count,
                total = self.total_result_set_size,
                "paging session complete"
            );
            self.state = SessionState::Done;
            self.emit(EventType::SessionCompleted);
        }

        Ok(Some(page))
    }

    /// Run the session to completion and collect every item with its index
    pub async fn run(mut self) -> Result<PagingOutcome<F::Item>, PagingError> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page.into_indexed());
        }

        Ok(PagingOutcome {
            items,
            total_result_set_size: self.total_result_set_size,
            fetch_count: self.fetch_count,
        })
    }

    /// Run the session to completion, handing each item and its index to `f`
    pub async fn for_each_item<G>(mut self, mut f: G) -> Result<PagingSummary, PagingError>
    where
        G: FnMut(u32, &F::Item),
    {
        let mut items_seen: u64 = 0;
        while let Some(page) = self.next_page().await? {
            for (index, item) in page.indexed() {
                f(index, item);
                items_seen += 1;
            }
        }

        Ok(PagingSummary {
            total_result_set_size: self.total_result_set_size,
            fetch_count: self.fetch_count,
            items_seen,
        })
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    fn fail(&mut self, error: PagingError) -> PagingError {
        tracing::debug!(session_id = %self.session_id, error = %error, "paging session failed");
        self.state = SessionState::Done;
        if let Some(signals) = &self.signal_manager {
            signals.emit(self.event(EventType::SessionFailed).with_error(error.to_string()));
        }
        error
    }

    fn event(&self, event_type: EventType) -> PagingEvent {
        PagingEvent::new(self.session_id, event_type).with_progress(
            self.builder.current_offset(),
            self.fetch_count,
            self.total_result_set_size,
        )
    }

    fn emit(&self, event_type: EventType) {
        if let Some(signals) = &self.signal_manager {
            signals.emit(self.event(event_type));
        }
    }
}
