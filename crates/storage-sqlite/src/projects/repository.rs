use budgetbook_core::errors::Error;
use budgetbook_core::projects::{NewProject, Project, ProjectRepositoryTrait, ProjectUpdate};
use budgetbook_core::Result;

use super::model::{NewProjectDB, ProjectDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::projects;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct ProjectRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProjectRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProjectRepository { pool, writer }
    }
}

#[async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    fn list(&self) -> Result<Vec<Project>> {
        let mut conn = get_connection(&self.pool)?;
        let projects_db = projects::table
            .order(projects::id.asc())
            .select(ProjectDB::as_select())
            .load::<ProjectDB>(&mut conn)
            .into_core()?;
        Ok(projects_db.into_iter().map(Project::from).collect())
    }

    fn get_by_id(&self, project_id: i64) -> Result<Project> {
        let mut conn = get_connection(&self.pool)?;
        projects::table
            .find(project_id)
            .select(ProjectDB::as_select())
            .first::<ProjectDB>(&mut conn)
            .optional()
            .into_core()?
            .map(Project::from)
            .ok_or_else(|| Error::not_found("Project", project_id))
    }

    async fn create(&self, new_project: NewProject) -> Result<Project> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Project> {
                let new_project_db: NewProjectDB = new_project.into();
                let result_db = diesel::insert_into(projects::table)
                    .values(&new_project_db)
                    .returning(ProjectDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Project::from(result_db))
            })
            .await
    }

    async fn update(&self, project_update: ProjectUpdate) -> Result<Project> {
        let project_db: ProjectDB = project_update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Project> {
                diesel::update(projects::table.find(project_db.id))
                    .set(&project_db)
                    .returning(ProjectDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .into_core()?
                    .map(Project::from)
                    .ok_or_else(|| Error::not_found("Project", project_db.id))
            })
            .await
    }

    async fn delete(&self, project_id: i64) -> Result<usize> {
        // Sub-budgets and their positions go with it (ON DELETE CASCADE).
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(projects::table.find(project_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
