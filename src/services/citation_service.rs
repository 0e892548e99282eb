//! Citation service - Renders a college's publications.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::AppResult;
use crate::infra::CitationsApi;
use crate::render::college_citations;

/// Citation service trait for dependency injection.
#[async_trait]
pub trait CitationService: Send + Sync {
    /// Published citations of a college grouped by year
    async fn college_citations(&self, college_id: u32) -> AppResult<String>;
}

/// Concrete implementation of CitationService backed by a CitationsApi.
pub struct CitationManager<C: CitationsApi> {
    api: Arc<C>,
}

impl<C: CitationsApi> CitationManager<C> {
    pub fn new(api: Arc<C>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<C: CitationsApi> CitationService for CitationManager<C> {
    async fn college_citations(&self, college_id: u32) -> AppResult<String> {
        let citations = self.api.college_citations(college_id).await?;
        tracing::debug!(
            college = college_id,
            citations = citations.len(),
            "Rendering college citations"
        );

        Ok(college_citations(citations))
    }
}
