use budgetbook_core::errors::Error;
use budgetbook_core::subbudgets::{
    NewSubbudget, Subbudget, SubbudgetRepositoryTrait, SubbudgetUpdate,
};
use budgetbook_core::Result;

use super::model::{NewSubbudgetDB, SubbudgetChangesDB, SubbudgetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{projects, subbudgets};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct SubbudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SubbudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SubbudgetRepository { pool, writer }
    }
}

#[async_trait]
impl SubbudgetRepositoryTrait for SubbudgetRepository {
    fn list_by_project(&self, project_id: i64) -> Result<Vec<Subbudget>> {
        let mut conn = get_connection(&self.pool)?;
        let subbudgets_db = subbudgets::table
            .filter(subbudgets::project_id.eq(project_id))
            .order(subbudgets::id.asc())
            .select(SubbudgetDB::as_select())
            .load::<SubbudgetDB>(&mut conn)
            .into_core()?;
        Ok(subbudgets_db.into_iter().map(Subbudget::from).collect())
    }

    fn get_by_id(&self, subbudget_id: i64) -> Result<Subbudget> {
        let mut conn = get_connection(&self.pool)?;
        subbudgets::table
            .find(subbudget_id)
            .select(SubbudgetDB::as_select())
            .first::<SubbudgetDB>(&mut conn)
            .optional()
            .into_core()?
            .map(Subbudget::from)
            .ok_or_else(|| Error::not_found("Sub-budget", subbudget_id))
    }

    async fn create(&self, new_subbudget: NewSubbudget) -> Result<Subbudget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Subbudget> {
                let project_id = new_subbudget.project_id;
                let project_exists: bool =
                    diesel::select(diesel::dsl::exists(projects::table.find(project_id)))
                        .get_result(conn)
                        .into_core()?;
                if !project_exists {
                    return Err(Error::not_found("Project", project_id));
                }

                let new_subbudget_db: NewSubbudgetDB = new_subbudget.into();
                let result_db = diesel::insert_into(subbudgets::table)
                    .values(&new_subbudget_db)
                    .returning(SubbudgetDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Subbudget::from(result_db))
            })
            .await
    }

    async fn update(&self, subbudget_update: SubbudgetUpdate) -> Result<Subbudget> {
        let subbudget_id = subbudget_update.id;
        let changes: SubbudgetChangesDB = subbudget_update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Subbudget> {
                diesel::update(subbudgets::table.find(subbudget_id))
                    .set(&changes)
                    .returning(SubbudgetDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .into_core()?
                    .map(Subbudget::from)
                    .ok_or_else(|| Error::not_found("Sub-budget", subbudget_id))
            })
            .await
    }

    async fn delete(&self, subbudget_id: i64) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(subbudgets::table.find(subbudget_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
