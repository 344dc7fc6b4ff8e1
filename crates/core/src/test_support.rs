//! In-memory repositories shared by the service tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::errors::{DatabaseError, Error, Result};
use crate::positions::{NewPosition, Position, PositionRepositoryTrait, PositionUpdate};
use crate::projects::{NewProject, Project, ProjectRepositoryTrait, ProjectUpdate};
use crate::subbudgets::{NewSubbudget, Subbudget, SubbudgetRepositoryTrait, SubbudgetUpdate};

#[derive(Default)]
struct Tables {
    next_id: i64,
    projects: BTreeMap<i64, Project>,
    subbudgets: BTreeMap<i64, Subbudget>,
    positions: BTreeMap<i64, Position>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn remove_subbudget_cascade(&mut self, subbudget_id: i64) -> usize {
        self.positions.retain(|_, p| p.subbudget_id != subbudget_id);
        usize::from(self.subbudgets.remove(&subbudget_id).is_some())
    }
}

/// Mirrors the SQLite schema: parent checks on insert, cascade on delete.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position_count(&self) -> usize {
        self.tables.lock().unwrap().positions.len()
    }

    pub fn subbudget_count(&self) -> usize {
        self.tables.lock().unwrap().subbudgets.len()
    }
}

#[async_trait]
impl ProjectRepositoryTrait for InMemoryStore {
    fn list(&self) -> Result<Vec<Project>> {
        Ok(self.tables.lock().unwrap().projects.values().cloned().collect())
    }

    fn get_by_id(&self, project_id: i64) -> Result<Project> {
        self.tables
            .lock()
            .unwrap()
            .projects
            .get(&project_id)
            .cloned()
            .ok_or_else(|| Error::not_found("Project", project_id))
    }

    async fn create(&self, new_project: NewProject) -> Result<Project> {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        let project = Project {
            id,
            name: new_project.name,
            total_budget: new_project.total_budget,
        };
        tables.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn update(&self, update: ProjectUpdate) -> Result<Project> {
        let mut tables = self.tables.lock().unwrap();
        let project = tables
            .projects
            .get_mut(&update.id)
            .ok_or_else(|| Error::not_found("Project", update.id))?;
        project.name = update.name;
        project.total_budget = update.total_budget;
        Ok(project.clone())
    }

    async fn delete(&self, project_id: i64) -> Result<usize> {
        let mut tables = self.tables.lock().unwrap();
        let children: Vec<i64> = tables
            .subbudgets
            .values()
            .filter(|s| s.project_id == project_id)
            .map(|s| s.id)
            .collect();
        for child in children {
            tables.remove_subbudget_cascade(child);
        }
        Ok(usize::from(tables.projects.remove(&project_id).is_some()))
    }
}

#[async_trait]
impl SubbudgetRepositoryTrait for InMemoryStore {
    fn list_by_project(&self, project_id: i64) -> Result<Vec<Subbudget>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .subbudgets
            .values()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, subbudget_id: i64) -> Result<Subbudget> {
        self.tables
            .lock()
            .unwrap()
            .subbudgets
            .get(&subbudget_id)
            .cloned()
            .ok_or_else(|| Error::not_found("Sub-budget", subbudget_id))
    }

    async fn create(&self, new_subbudget: NewSubbudget) -> Result<Subbudget> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.projects.contains_key(&new_subbudget.project_id) {
            return Err(Error::not_found("Project", new_subbudget.project_id));
        }
        let id = tables.next_id();
        let subbudget = Subbudget {
            id,
            project_id: new_subbudget.project_id,
            name: new_subbudget.name,
            budget: new_subbudget.budget,
            threshold: new_subbudget.threshold,
        };
        tables.subbudgets.insert(id, subbudget.clone());
        Ok(subbudget)
    }

    async fn update(&self, update: SubbudgetUpdate) -> Result<Subbudget> {
        let mut tables = self.tables.lock().unwrap();
        let subbudget = tables
            .subbudgets
            .get_mut(&update.id)
            .ok_or_else(|| Error::not_found("Sub-budget", update.id))?;
        subbudget.name = update.name;
        subbudget.budget = update.budget;
        subbudget.threshold = update.threshold;
        Ok(subbudget.clone())
    }

    async fn delete(&self, subbudget_id: i64) -> Result<usize> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .remove_subbudget_cascade(subbudget_id))
    }
}

#[async_trait]
impl PositionRepositoryTrait for InMemoryStore {
    fn list_by_subbudget(&self, subbudget_id: i64) -> Result<Vec<Position>> {
        self.list_by_subbudgets(&[subbudget_id])
    }

    fn list_by_subbudgets(&self, subbudget_ids: &[i64]) -> Result<Vec<Position>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .positions
            .values()
            .filter(|p| subbudget_ids.contains(&p.subbudget_id))
            .cloned()
            .collect())
    }

    fn get_by_id(&self, position_id: i64) -> Result<Position> {
        self.tables
            .lock()
            .unwrap()
            .positions
            .get(&position_id)
            .cloned()
            .ok_or_else(|| Error::not_found("Position", position_id))
    }

    async fn create(&self, new_position: NewPosition) -> Result<Position> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.subbudgets.contains_key(&new_position.subbudget_id) {
            return Err(Error::not_found("Sub-budget", new_position.subbudget_id));
        }
        let id = tables.next_id();
        let position = Position {
            id,
            subbudget_id: new_position.subbudget_id,
            name: new_position.name,
            planned: new_position.planned,
            actual: new_position.actual,
            done: new_position.done,
        };
        tables.positions.insert(id, position.clone());
        Ok(position)
    }

    async fn update(&self, update: PositionUpdate) -> Result<Position> {
        let mut tables = self.tables.lock().unwrap();
        let position = tables
            .positions
            .get_mut(&update.id)
            .ok_or_else(|| Error::not_found("Position", update.id))?;
        position.name = update.name;
        position.planned = update.planned;
        position.actual = update.actual;
        position.done = update.done;
        Ok(position.clone())
    }

    async fn delete(&self, position_id: i64) -> Result<usize> {
        Ok(usize::from(
            self.tables
                .lock()
                .unwrap()
                .positions
                .remove(&position_id)
                .is_some(),
        ))
    }
}

/// Repository whose every call fails like a broken database would.
pub struct FailingProjectRepository;

fn storage_failure() -> Error {
    Error::Database(DatabaseError::QueryFailed("disk I/O error".to_string()))
}

#[async_trait]
impl ProjectRepositoryTrait for FailingProjectRepository {
    fn list(&self) -> Result<Vec<Project>> {
        Err(storage_failure())
    }

    fn get_by_id(&self, _project_id: i64) -> Result<Project> {
        Err(storage_failure())
    }

    async fn create(&self, _new_project: NewProject) -> Result<Project> {
        Err(storage_failure())
    }

    async fn update(&self, _project_update: ProjectUpdate) -> Result<Project> {
        Err(storage_failure())
    }

    async fn delete(&self, _project_id: i64) -> Result<usize> {
        Err(storage_failure())
    }
}
