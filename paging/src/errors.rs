use crate::fetcher::RemoteServiceError;
use statement::StatementError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagingError {
    #[error("Invalid page size {size}: must be between 1 and {max}")]
    InvalidPageSize { size: u32, max: u32 },

    #[error("Statement error: {0}")]
    Statement(#[from] StatementError),

    #[error("Remote service error: {0}")]
    Remote(#[from] RemoteServiceError),

    #[error("Paging session cancelled")]
    Cancelled,
}
