//! Thin orchestration over the project store.

use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for catalogue operations.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

/// Result type for catalogue service operations.
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Project creation and lookup service.
#[derive(Clone)]
pub struct ProjectCatalogueService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ProjectCatalogueService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new catalogue service.
    #[must_use]
    pub const fn new(projects: Arc<R>, clock: Arc<C>) -> Self {
        Self { projects, clock }
    }

    /// Creates and persists a new project.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Repository`] when persistence fails.
    pub async fn create(&self, name: impl Into<String> + Send) -> CatalogueResult<Project> {
        let project = Project::new(name, &*self.clock);
        self.projects.store(&project).await?;
        Ok(project)
    }

    /// Retrieves a project by identifier.
    ///
    /// Returns `Ok(None)` when the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: ProjectId) -> CatalogueResult<Option<Project>> {
        Ok(self.projects.find_by_id(id).await?)
    }

    /// Returns all projects.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Repository`] when the lookup fails.
    pub async fn find_all(&self) -> CatalogueResult<Vec<Project>> {
        Ok(self.projects.find_all().await?)
    }
}
