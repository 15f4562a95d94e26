//! # Configuration Management for AdPager
//!
//! This crate provides the configuration structures shared by the paging
//! components: the API session the statements are sent through and the
//! paging defaults applied to every session.
//!
//! Credentials are not read here; the transport behind a page fetcher owns
//! authentication.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{PagingConfig, SessionConfig};
//!
//! let session = SessionConfig::new(
//!     "123456".to_string(),
//!     "inventory-sync".to_string(),
//!     "https://ads.example.com/apis/admanager".to_string(),
//! );
//!
//! let paging = PagingConfig::new(250, 500);
//! assert_eq!(paging.page_size, 250);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [session]
//! network_code = "123456"
//! application_name = "inventory-sync"
//! endpoint = "https://ads.example.com/apis/admanager"
//! api_version = "v201802"
//!
//! [paging]
//! page_size = 500
//! max_page_size = 500
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from the path in ADPAGER_CONFIG, or ./adpager.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./adpager.toml";
const CONFIG_PATH_VAR: &str = "ADPAGER_CONFIG";

/// Page size the remote service recommends and will not exceed
pub const DEFAULT_PAGE_SIZE: u32 = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub session: SessionConfig,
    #[serde(default)]
    pub paging: PagingConfig,
}

/// API session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub network_code: String,
    pub application_name: String,
    pub endpoint: String,
    #[serde(default)]
    pub api_version: Option<String>,
}

/// Paging defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_page_size")]
    pub max_page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl AppConfig {
    /// Load configuration from the TOML file named in `.env`/environment or defaults
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        // Path from ADPAGER_CONFIG takes precedence over the default file
        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified as {} in the environment or .env file, or in {}",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()?;
        self.paging.validate()
    }
}

impl SessionConfig {
    /// Create a new session configuration
    pub fn new(network_code: String, application_name: String, endpoint: String) -> Self {
        Self {
            network_code,
            application_name,
            endpoint,
            api_version: None,
        }
    }

    pub fn with_api_version(mut self, api_version: String) -> Self {
        self.api_version = Some(api_version);
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.network_code.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Session network_code cannot be empty".to_string(),
            ));
        }
        if self.application_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Session application_name cannot be empty".to_string(),
            ));
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Session endpoint cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl PagingConfig {
    /// Create a new paging configuration
    pub fn new(page_size: u32, max_page_size: u32) -> Self {
        Self {
            page_size,
            max_page_size,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid(
                "Paging page_size must be greater than 0".to_string(),
            ));
        }
        if self.page_size > self.max_page_size {
            return Err(ConfigError::Invalid(format!(
                "Paging page_size {} exceeds max_page_size {}",
                self.page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE)
    }
}
