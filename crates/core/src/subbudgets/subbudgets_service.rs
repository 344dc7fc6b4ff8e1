use crate::errors::Result;
use crate::positions::PositionRepositoryTrait;
use crate::projects::ProjectRepositoryTrait;
use crate::subbudgets::subbudgets_model::{Subbudget, SubbudgetPayload, SubbudgetWithUsage};
use crate::subbudgets::subbudgets_traits::{SubbudgetRepositoryTrait, SubbudgetServiceTrait};
use crate::usage::{subbudget_usage, subbudgets_usage};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct SubbudgetService {
    repository: Arc<dyn SubbudgetRepositoryTrait>,
    project_repository: Arc<dyn ProjectRepositoryTrait>,
    position_repository: Arc<dyn PositionRepositoryTrait>,
}

impl SubbudgetService {
    pub fn new(
        repository: Arc<dyn SubbudgetRepositoryTrait>,
        project_repository: Arc<dyn ProjectRepositoryTrait>,
        position_repository: Arc<dyn PositionRepositoryTrait>,
    ) -> Self {
        SubbudgetService {
            repository,
            project_repository,
            position_repository,
        }
    }
}

#[async_trait]
impl SubbudgetServiceTrait for SubbudgetService {
    fn get_subbudgets(&self, project_id: i64) -> Result<Vec<SubbudgetWithUsage>> {
        // Distinguish "no such project" from "project without sub-budgets".
        self.project_repository.get_by_id(project_id)?;

        let subbudgets = self.repository.list_by_project(project_id)?;
        let ids: Vec<i64> = subbudgets.iter().map(|s| s.id).collect();
        let positions = self.position_repository.list_by_subbudgets(&ids)?;

        Ok(subbudgets_usage(subbudgets, &positions))
    }

    fn get_subbudget(&self, subbudget_id: i64) -> Result<SubbudgetWithUsage> {
        let subbudget = self.repository.get_by_id(subbudget_id)?;
        let positions = self.position_repository.list_by_subbudget(subbudget_id)?;
        Ok(subbudget_usage(subbudget, &positions))
    }

    async fn create_subbudget(
        &self,
        project_id: i64,
        payload: SubbudgetPayload,
    ) -> Result<Subbudget> {
        let new_subbudget = payload.validate()?.for_project(project_id);
        let subbudget = self.repository.create(new_subbudget).await?;
        debug!(
            "Created sub-budget {} under project {}",
            subbudget.id, subbudget.project_id
        );
        Ok(subbudget)
    }

    async fn update_subbudget(
        &self,
        subbudget_id: i64,
        payload: SubbudgetPayload,
    ) -> Result<Subbudget> {
        let update = payload.validate()?.into_update(subbudget_id);
        self.repository.update(update).await
    }

    async fn delete_subbudget(&self, subbudget_id: i64) -> Result<usize> {
        self.repository.delete(subbudget_id).await
    }
}
