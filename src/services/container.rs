//! Service Container - Centralized service access.
//!
//! Wires repositories and web service clients into the services the
//! HTTP handlers and CLI commands use.

use std::sync::Arc;

use super::{CitationManager, CitationService, DirectoryManager, DirectoryService};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{CitationsClient, PersonStore};
use crate::render::ProfileLinks;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get directory service
    fn directory(&self) -> Arc<dyn DirectoryService>;

    /// Get citation service
    fn citations(&self) -> Arc<dyn CitationService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    directory_service: Arc<dyn DirectoryService>,
    citation_service: Arc<dyn CitationService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        directory_service: Arc<dyn DirectoryService>,
        citation_service: Arc<dyn CitationService>,
    ) -> Self {
        Self {
            directory_service,
            citation_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(
        db: Arc<sea_orm::DatabaseConnection>,
        config: &Config,
    ) -> AppResult<Self> {
        let people = Arc::new(PersonStore::new(db));
        let citations_api = Arc::new(CitationsClient::new(config)?);

        Ok(Self {
            directory_service: Arc::new(DirectoryManager::new(
                people,
                ProfileLinks::from_config(config),
            )),
            citation_service: Arc::new(CitationManager::new(citations_api)),
        })
    }
}

impl ServiceContainer for Services {
    fn directory(&self) -> Arc<dyn DirectoryService> {
        self.directory_service.clone()
    }

    fn citations(&self) -> Arc<dyn CitationService> {
        self.citation_service.clone()
    }
}
