use crate::errors::Result;
use crate::positions::positions_model::{Position, PositionPayload};
use crate::positions::positions_traits::{PositionRepositoryTrait, PositionServiceTrait};
use crate::subbudgets::SubbudgetRepositoryTrait;
use async_trait::async_trait;
use std::sync::Arc;

pub struct PositionService {
    repository: Arc<dyn PositionRepositoryTrait>,
    subbudget_repository: Arc<dyn SubbudgetRepositoryTrait>,
}

impl PositionService {
    pub fn new(
        repository: Arc<dyn PositionRepositoryTrait>,
        subbudget_repository: Arc<dyn SubbudgetRepositoryTrait>,
    ) -> Self {
        PositionService {
            repository,
            subbudget_repository,
        }
    }
}

#[async_trait]
impl PositionServiceTrait for PositionService {
    fn get_positions(&self, subbudget_id: i64) -> Result<Vec<Position>> {
        self.subbudget_repository.get_by_id(subbudget_id)?;
        self.repository.list_by_subbudget(subbudget_id)
    }

    fn get_position(&self, position_id: i64) -> Result<Position> {
        self.repository.get_by_id(position_id)
    }

    async fn create_position(
        &self,
        subbudget_id: i64,
        payload: PositionPayload,
    ) -> Result<Position> {
        let new_position = payload.validate()?.for_subbudget(subbudget_id);
        self.repository.create(new_position).await
    }

    async fn update_position(
        &self,
        position_id: i64,
        payload: PositionPayload,
    ) -> Result<Position> {
        let update = payload.validate()?.into_update(position_id);
        self.repository.update(update).await
    }

    async fn delete_position(&self, position_id: i64) -> Result<usize> {
        self.repository.delete(position_id).await
    }
}
