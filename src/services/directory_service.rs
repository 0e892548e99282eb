//! Directory service - Renders people listings for centers and departments.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::CENTER_ENTITY_PREFIX;
use crate::errors::AppResult;
use crate::infra::PersonRepository;
use crate::render::{center_listing, department_listing, ProfileLinks};

/// Directory service trait for dependency injection.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Listing of a center's people split by role. An empty id matches
    /// no center and renders the bare listing.
    async fn center_people(&self, center_id: &str) -> AppResult<String>;

    /// Listing of a department's faculty
    async fn department_people(&self, department_id: &str) -> AppResult<String>;
}

/// Concrete implementation of DirectoryService backed by a PersonRepository.
pub struct DirectoryManager<R: PersonRepository> {
    repo: Arc<R>,
    links: ProfileLinks,
}

impl<R: PersonRepository> DirectoryManager<R> {
    pub fn new(repo: Arc<R>, links: ProfileLinks) -> Self {
        Self { repo, links }
    }
}

#[async_trait]
impl<R: PersonRepository> DirectoryService for DirectoryManager<R> {
    async fn center_people(&self, center_id: &str) -> AppResult<String> {
        let parent = format!("{}{}", CENTER_ENTITY_PREFIX, center_id);

        let people = self.repo.find_by_parent_entity(&parent).await?;
        tracing::debug!(center = %center_id, people = people.len(), "Rendering center listing");

        Ok(center_listing(&people, &self.links))
    }

    async fn department_people(&self, department_id: &str) -> AppResult<String> {
        let people = self.repo.find_by_department(department_id).await?;
        tracing::debug!(
            department = %department_id,
            people = people.len(),
            "Rendering department listing"
        );

        Ok(department_listing(&people, &self.links))
    }
}
