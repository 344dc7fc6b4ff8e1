use crate::errors::Result;
use crate::projects::projects_model::{
    NewProject, Project, ProjectPayload, ProjectSummary, ProjectUpdate,
};
use async_trait::async_trait;

/// Trait for project repository operations
#[async_trait]
pub trait ProjectRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Project>>;
    /// Fails with `Error::NotFound` when no project has this id.
    fn get_by_id(&self, project_id: i64) -> Result<Project>;
    async fn create(&self, new_project: NewProject) -> Result<Project>;
    /// Fails with `Error::NotFound` when no project has this id.
    async fn update(&self, project_update: ProjectUpdate) -> Result<Project>;
    /// Removes the project and, through the cascade, all of its descendants.
    /// Returns the number of project rows removed.
    async fn delete(&self, project_id: i64) -> Result<usize>;
}

/// Trait for project service operations
#[async_trait]
pub trait ProjectServiceTrait: Send + Sync {
    fn get_projects(&self) -> Result<Vec<Project>>;
    fn get_project(&self, project_id: i64) -> Result<Project>;
    fn get_project_summary(&self, project_id: i64) -> Result<ProjectSummary>;
    async fn create_project(&self, payload: ProjectPayload) -> Result<Project>;
    async fn update_project(&self, project_id: i64, payload: ProjectPayload) -> Result<Project>;
    async fn delete_project(&self, project_id: i64) -> Result<usize>;
}
