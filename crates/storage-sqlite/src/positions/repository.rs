use budgetbook_core::errors::Error;
use budgetbook_core::positions::{NewPosition, Position, PositionRepositoryTrait, PositionUpdate};
use budgetbook_core::Result;

use super::model::{NewPositionDB, PositionChangesDB, PositionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{positions, subbudgets};
use crate::utils::chunk_for_sqlite;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct PositionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PositionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PositionRepository { pool, writer }
    }
}

#[async_trait]
impl PositionRepositoryTrait for PositionRepository {
    fn list_by_subbudget(&self, subbudget_id: i64) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let positions_db = positions::table
            .filter(positions::subbudget_id.eq(subbudget_id))
            .order(positions::id.asc())
            .select(PositionDB::as_select())
            .load::<PositionDB>(&mut conn)
            .into_core()?;
        Ok(positions_db.into_iter().map(Position::from).collect())
    }

    fn list_by_subbudgets(&self, subbudget_ids: &[i64]) -> Result<Vec<Position>> {
        if subbudget_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = get_connection(&self.pool)?;
        let mut all_positions = Vec::new();
        for chunk in chunk_for_sqlite(subbudget_ids) {
            let positions_db = positions::table
                .filter(positions::subbudget_id.eq_any(chunk))
                .order(positions::id.asc())
                .select(PositionDB::as_select())
                .load::<PositionDB>(&mut conn)
                .into_core()?;
            all_positions.extend(positions_db.into_iter().map(Position::from));
        }
        Ok(all_positions)
    }

    fn get_by_id(&self, position_id: i64) -> Result<Position> {
        let mut conn = get_connection(&self.pool)?;
        positions::table
            .find(position_id)
            .select(PositionDB::as_select())
            .first::<PositionDB>(&mut conn)
            .optional()
            .into_core()?
            .map(Position::from)
            .ok_or_else(|| Error::not_found("Position", position_id))
    }

    async fn create(&self, new_position: NewPosition) -> Result<Position> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Position> {
                let subbudget_id = new_position.subbudget_id;
                let subbudget_exists: bool =
                    diesel::select(diesel::dsl::exists(subbudgets::table.find(subbudget_id)))
                        .get_result(conn)
                        .into_core()?;
                if !subbudget_exists {
                    return Err(Error::not_found("Sub-budget", subbudget_id));
                }

                let new_position_db: NewPositionDB = new_position.into();
                let result_db = diesel::insert_into(positions::table)
                    .values(&new_position_db)
                    .returning(PositionDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Position::from(result_db))
            })
            .await
    }

    async fn update(&self, position_update: PositionUpdate) -> Result<Position> {
        let position_id = position_update.id;
        let changes: PositionChangesDB = position_update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Position> {
                diesel::update(positions::table.find(position_id))
                    .set(&changes)
                    .returning(PositionDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .into_core()?
                    .map(Position::from)
                    .ok_or_else(|| Error::not_found("Position", position_id))
            })
            .await
    }

    async fn delete(&self, position_id: i64) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(positions::table.find(position_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
