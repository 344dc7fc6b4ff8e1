use crate::errors::Result;
use crate::subbudgets::subbudgets_model::{
    NewSubbudget, Subbudget, SubbudgetPayload, SubbudgetUpdate, SubbudgetWithUsage,
};
use async_trait::async_trait;

/// Trait for sub-budget repository operations
#[async_trait]
pub trait SubbudgetRepositoryTrait: Send + Sync {
    fn list_by_project(&self, project_id: i64) -> Result<Vec<Subbudget>>;
    fn get_by_id(&self, subbudget_id: i64) -> Result<Subbudget>;
    /// Fails with `Error::NotFound` for the project when it does not exist;
    /// no row is written in that case.
    async fn create(&self, new_subbudget: NewSubbudget) -> Result<Subbudget>;
    async fn update(&self, subbudget_update: SubbudgetUpdate) -> Result<Subbudget>;
    /// Removes the sub-budget and its positions.
    async fn delete(&self, subbudget_id: i64) -> Result<usize>;
}

/// Trait for sub-budget service operations
#[async_trait]
pub trait SubbudgetServiceTrait: Send + Sync {
    fn get_subbudgets(&self, project_id: i64) -> Result<Vec<SubbudgetWithUsage>>;
    fn get_subbudget(&self, subbudget_id: i64) -> Result<SubbudgetWithUsage>;
    async fn create_subbudget(
        &self,
        project_id: i64,
        payload: SubbudgetPayload,
    ) -> Result<Subbudget>;
    async fn update_subbudget(
        &self,
        subbudget_id: i64,
        payload: SubbudgetPayload,
    ) -> Result<Subbudget>;
    async fn delete_subbudget(&self, subbudget_id: i64) -> Result<usize>;
}
