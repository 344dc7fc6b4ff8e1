//! Database models for projects.

use diesel::prelude::*;

/// Database model for projects
#[derive(Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProjectDB {
    pub id: i64,
    pub name: String,
    pub total_budget: f64,
}

/// Database model for creating a new project; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::projects)]
pub struct NewProjectDB {
    pub name: String,
    pub total_budget: f64,
}

// Conversion to domain models
impl From<ProjectDB> for budgetbook_core::projects::Project {
    fn from(db: ProjectDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            total_budget: db.total_budget,
        }
    }
}

impl From<budgetbook_core::projects::NewProject> for NewProjectDB {
    fn from(domain: budgetbook_core::projects::NewProject) -> Self {
        Self {
            name: domain.name,
            total_budget: domain.total_budget,
        }
    }
}

impl From<budgetbook_core::projects::ProjectUpdate> for ProjectDB {
    fn from(domain: budgetbook_core::projects::ProjectUpdate) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            total_budget: domain.total_budget,
        }
    }
}
