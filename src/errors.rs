//! Error types for the AdPager crate
//!
//! This module contains all error types that can be returned by AdPager operations.

use config::ConfigError;
use paging::PagingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdPagerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Paging error: {0}")]
    Paging(#[from] PagingError),

    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    #[error("Service already registered: {0}")]
    ServiceAlreadyRegistered(String),
}
