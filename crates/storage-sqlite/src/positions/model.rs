//! Database models for positions.

use diesel::prelude::*;

/// Database model for positions
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::positions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PositionDB {
    pub id: i64,
    pub subbudget_id: i64,
    pub name: String,
    pub planned: f64,
    pub actual: f64,
    pub done: bool,
}

/// Database model for creating a new position
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::positions)]
pub struct NewPositionDB {
    pub subbudget_id: i64,
    pub name: String,
    pub planned: f64,
    pub actual: f64,
    pub done: bool,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::positions)]
pub struct PositionChangesDB {
    pub name: String,
    pub planned: f64,
    pub actual: f64,
    pub done: bool,
}

impl From<PositionDB> for budgetbook_core::positions::Position {
    fn from(db: PositionDB) -> Self {
        Self {
            id: db.id,
            subbudget_id: db.subbudget_id,
            name: db.name,
            planned: db.planned,
            actual: db.actual,
            done: db.done,
        }
    }
}

impl From<budgetbook_core::positions::NewPosition> for NewPositionDB {
    fn from(domain: budgetbook_core::positions::NewPosition) -> Self {
        Self {
            subbudget_id: domain.subbudget_id,
            name: domain.name,
            planned: domain.planned,
            actual: domain.actual,
            done: domain.done,
        }
    }
}

impl From<budgetbook_core::positions::PositionUpdate> for PositionChangesDB {
    fn from(domain: budgetbook_core::positions::PositionUpdate) -> Self {
        Self {
            name: domain.name,
            planned: domain.planned,
            actual: domain.actual,
            done: domain.done,
        }
    }
}
