//! Core AdPager functionality
//!
//! This module contains the main AdPager struct and its implementation,
//! providing a registry of query services and paging sessions configured
//! from one place.

use config::{AppConfig, PagingConfig, SessionConfig};
use paging::{PageFetcher, PagingDriver, PagingOutcome};
use paging_signals::SignalManager;
use statement::StatementBuilder;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::AdPagerError;

/// Query service shared between the registry and running sessions
pub type SharedFetcher<T> = Arc<dyn PageFetcher<Item = T>>;

/// Main AdPager coordinator that manages query services and paging defaults
pub struct AdPager {
    paging: PagingConfig,
    session: Option<SessionConfig>,
    services: HashMap<String, Box<dyn Any + Send + Sync>>,
    signal_manager: Option<Arc<SignalManager>>,
}

impl std::fmt::Debug for AdPager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdPager")
            .field("paging", &self.paging)
            .field("session", &self.session)
            .field("services", &self.list_services())
            .field("has_signals", &self.signal_manager.is_some())
            .finish()
    }
}

impl AdPager {
    /// Create new AdPager with paging defaults
    pub fn new(paging: PagingConfig) -> Result<Self, AdPagerError> {
        paging.validate()?;

        Ok(Self {
            paging,
            session: None,
            services: HashMap::new(),
            signal_manager: None,
        })
    }

    /// Create new AdPager from a loaded application config
    pub fn from_config(config: AppConfig) -> Result<Self, AdPagerError> {
        config.validate()?;
        let mut pager = Self::new(config.paging)?;
        pager.session = Some(config.session);
        Ok(pager)
    }

    pub fn paging_config(&self) -> &PagingConfig {
        &self.paging
    }

    pub fn session_config(&self) -> Option<&SessionConfig> {
        self.session.as_ref()
    }

    /// Share one signal manager with every session created from now on
    pub fn enable_signals(&mut self) -> Arc<SignalManager> {
        self.signal_manager
            .get_or_insert_with(|| Arc::new(SignalManager::new()))
            .clone()
    }

    pub fn signals(&self) -> Option<&Arc<SignalManager>> {
        self.signal_manager.as_ref()
    }

    /// Register a query service with a given name
    pub fn register_service<T>(
        &mut self,
        name: String,
        service: SharedFetcher<T>,
    ) -> Result<(), AdPagerError>
    where
        T: Send + 'static,
    {
        if self.services.contains_key(&name) {
            return Err(AdPagerError::ServiceAlreadyRegistered(name));
        }

        crate::debug_log!("registering query service {}", name);
        self.services.insert(name, Box::new(service));
        Ok(())
    }

    /// Get a registered query service by name
    pub fn get_service<T>(&self, name: &str) -> Result<SharedFetcher<T>, AdPagerError>
    where
        T: Send + 'static,
    {
        self.services
            .get(name)
            .and_then(|service| service.downcast_ref::<SharedFetcher<T>>())
            .cloned()
            .ok_or_else(|| AdPagerError::ServiceNotFound(name.to_string()))
    }

    /// List all registered service names
    pub fn list_services(&self) -> Vec<&String> {
        self.services.keys().collect()
    }

    /// Remove a query service by name
    pub fn unregister_service(&mut self, name: &str) -> Result<(), AdPagerError> {
        self.services
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| AdPagerError::ServiceNotFound(name.to_string()))
    }

    /// Start a paging session against a registered service using the
    /// configured page size
    pub fn session<T>(
        &self,
        name: &str,
        builder: StatementBuilder,
    ) -> Result<PagingDriver<SharedFetcher<T>>, AdPagerError>
    where
        T: Send + 'static,
    {
        let service = self.get_service::<T>(name)?;
        let mut driver = PagingDriver::with_max_page_size(
            service,
            builder,
            self.paging.page_size,
            self.paging.max_page_size,
        )?;

        if let Some(signals) = &self.signal_manager {
            driver = driver.with_signals(Arc::clone(signals));
        }

        crate::trace_log!("session {} created for service {}", driver.session_id(), name);
        Ok(driver)
    }

    /// Page through every result of `builder` on a registered service
    pub async fn fetch_all<T>(
        &self,
        name: &str,
        builder: StatementBuilder,
    ) -> Result<PagingOutcome<T>, AdPagerError>
    where
        T: Send + 'static,
    {
        let outcome = self.session::<T>(name, builder)?.run().await?;
        Ok(outcome)
    }
}
