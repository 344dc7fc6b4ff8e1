use crate::errors::Result;
use crate::positions::positions_model::{NewPosition, Position, PositionPayload, PositionUpdate};
use async_trait::async_trait;

/// Trait for position repository operations
#[async_trait]
pub trait PositionRepositoryTrait: Send + Sync {
    fn list_by_subbudget(&self, subbudget_id: i64) -> Result<Vec<Position>>;
    /// Loads the positions of several sub-budgets at once.
    fn list_by_subbudgets(&self, subbudget_ids: &[i64]) -> Result<Vec<Position>>;
    fn get_by_id(&self, position_id: i64) -> Result<Position>;
    /// Fails with `Error::NotFound` for the sub-budget when it does not exist.
    async fn create(&self, new_position: NewPosition) -> Result<Position>;
    async fn update(&self, position_update: PositionUpdate) -> Result<Position>;
    async fn delete(&self, position_id: i64) -> Result<usize>;
}

/// Trait for position service operations
#[async_trait]
pub trait PositionServiceTrait: Send + Sync {
    fn get_positions(&self, subbudget_id: i64) -> Result<Vec<Position>>;
    fn get_position(&self, position_id: i64) -> Result<Position>;
    async fn create_position(
        &self,
        subbudget_id: i64,
        payload: PositionPayload,
    ) -> Result<Position>;
    async fn update_position(&self, position_id: i64, payload: PositionPayload)
        -> Result<Position>;
    async fn delete_position(&self, position_id: i64) -> Result<usize>;
}
