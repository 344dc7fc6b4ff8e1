//! Database models for sub-budgets.

use diesel::prelude::*;

/// Database model for sub-budgets
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::subbudgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubbudgetDB {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub budget: f64,
    pub threshold: f64,
}

/// Database model for creating a new sub-budget
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::subbudgets)]
pub struct NewSubbudgetDB {
    pub project_id: i64,
    pub name: String,
    pub budget: f64,
    pub threshold: f64,
}

/// Columns a full update may touch; the owning project is left alone.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::subbudgets)]
pub struct SubbudgetChangesDB {
    pub name: String,
    pub budget: f64,
    pub threshold: f64,
}

impl From<SubbudgetDB> for budgetbook_core::subbudgets::Subbudget {
    fn from(db: SubbudgetDB) -> Self {
        Self {
            id: db.id,
            project_id: db.project_id,
            name: db.name,
            budget: db.budget,
            threshold: db.threshold,
        }
    }
}

impl From<budgetbook_core::subbudgets::NewSubbudget> for NewSubbudgetDB {
    fn from(domain: budgetbook_core::subbudgets::NewSubbudget) -> Self {
        Self {
            project_id: domain.project_id,
            name: domain.name,
            budget: domain.budget,
            threshold: domain.threshold,
        }
    }
}

impl From<budgetbook_core::subbudgets::SubbudgetUpdate> for SubbudgetChangesDB {
    fn from(domain: budgetbook_core::subbudgets::SubbudgetUpdate) -> Self {
        Self {
            name: domain.name,
            budget: domain.budget,
            threshold: domain.threshold,
        }
    }
}
