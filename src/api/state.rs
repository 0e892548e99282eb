//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{CitationService, DirectoryService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Center and department listings
    pub directory_service: Arc<dyn DirectoryService>,
    /// College citation listings
    pub citation_service: Arc<dyn CitationService>,
    /// Database connection, checked by the health endpoint
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state from a connected database and its services.
    pub fn from_services(database: Arc<Database>, services: &Services) -> Self {
        Self {
            directory_service: services.directory(),
            citation_service: services.citations(),
            database: Some(database),
        }
    }

    /// Create new application state with manually injected services.
    ///
    /// Without a database the health endpoint reports it as unconfigured.
    pub fn new(
        directory_service: Arc<dyn DirectoryService>,
        citation_service: Arc<dyn CitationService>,
    ) -> Self {
        Self {
            directory_service,
            citation_service,
            database: None,
        }
    }
}
