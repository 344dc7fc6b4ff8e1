use crate::errors::Result;
use crate::projects::projects_model::{Project, ProjectPayload, ProjectSummary};
use crate::projects::projects_traits::{ProjectRepositoryTrait, ProjectServiceTrait};
use crate::subbudgets::SubbudgetServiceTrait;
use crate::usage::project_summary;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct ProjectService {
    repository: Arc<dyn ProjectRepositoryTrait>,
    subbudget_service: Arc<dyn SubbudgetServiceTrait>,
}

impl ProjectService {
    pub fn new(
        repository: Arc<dyn ProjectRepositoryTrait>,
        subbudget_service: Arc<dyn SubbudgetServiceTrait>,
    ) -> Self {
        ProjectService {
            repository,
            subbudget_service,
        }
    }
}

#[async_trait]
impl ProjectServiceTrait for ProjectService {
    fn get_projects(&self) -> Result<Vec<Project>> {
        self.repository.list()
    }

    fn get_project(&self, project_id: i64) -> Result<Project> {
        self.repository.get_by_id(project_id)
    }

    fn get_project_summary(&self, project_id: i64) -> Result<ProjectSummary> {
        let project = self.repository.get_by_id(project_id)?;
        let subbudgets = self.subbudget_service.get_subbudgets(project_id)?;
        Ok(project_summary(project, subbudgets))
    }

    async fn create_project(&self, payload: ProjectPayload) -> Result<Project> {
        let new_project = payload.validate()?;
        let project = self.repository.create(new_project).await?;
        debug!("Created project {} ({})", project.id, project.name);
        Ok(project)
    }

    async fn update_project(&self, project_id: i64, payload: ProjectPayload) -> Result<Project> {
        let update = payload.validate()?.into_update(project_id);
        self.repository.update(update).await
    }

    async fn delete_project(&self, project_id: i64) -> Result<usize> {
        let deleted = self.repository.delete(project_id).await?;
        if deleted == 0 {
            debug!("Delete of project {} matched no rows", project_id);
        }
        Ok(deleted)
    }
}
