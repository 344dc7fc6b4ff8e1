//! Unit tests for the sub-budget service.

use super::*;
use crate::errors::Error;
use crate::positions::{PositionPayload, PositionService, PositionServiceTrait};
use crate::projects::{ProjectPayload, ProjectService, ProjectServiceTrait};
use crate::test_support::InMemoryStore;
use crate::utils::NumberInput;
use std::sync::Arc;

struct Services {
    store: InMemoryStore,
    projects: ProjectService,
    subbudgets: Arc<SubbudgetService>,
    positions: PositionService,
}

fn services() -> Services {
    let store = InMemoryStore::new();
    let repo = Arc::new(store.clone());
    let subbudgets = Arc::new(SubbudgetService::new(
        repo.clone(),
        repo.clone(),
        repo.clone(),
    ));
    Services {
        projects: ProjectService::new(repo.clone(), subbudgets.clone()),
        positions: PositionService::new(repo.clone(), repo),
        subbudgets,
        store,
    }
}

async fn project(s: &Services, budget: f64) -> i64 {
    s.projects
        .create_project(ProjectPayload::new("Project", budget))
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn threshold_defaults_to_nine_tenths() {
    let s = services();
    let project_id = project(&s, 100.0).await;

    let sub = s
        .subbudgets
        .create_subbudget(project_id, SubbudgetPayload::new("Misc", 50.0, None))
        .await
        .unwrap();

    assert_eq!(sub.threshold, 0.9);
    assert_eq!(sub.project_id, project_id);
}

#[tokio::test]
async fn create_under_missing_project_is_not_found_and_writes_nothing() {
    let s = services();

    let err = s
        .subbudgets
        .create_subbudget(404, SubbudgetPayload::new("Orphan", 10.0, None))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { entity: "Project", id: 404 }));
    assert_eq!(s.store.subbudget_count(), 0);
}

#[tokio::test]
async fn used_counts_only_own_positions() {
    let s = services();
    let project_id = project(&s, 1000.0).await;
    let a = s
        .subbudgets
        .create_subbudget(project_id, SubbudgetPayload::new("A", 300.0, None))
        .await
        .unwrap();
    let b = s
        .subbudgets
        .create_subbudget(project_id, SubbudgetPayload::new("B", 300.0, None))
        .await
        .unwrap();
    s.positions
        .create_position(a.id, PositionPayload::new("a1", 100.0, 0.0, false))
        .await
        .unwrap();
    s.positions
        .create_position(a.id, PositionPayload::new("a2", 50.0, 70.0, true))
        .await
        .unwrap();
    s.positions
        .create_position(b.id, PositionPayload::new("b1", 20.0, 0.0, false))
        .await
        .unwrap();

    let listed = s.subbudgets.get_subbudgets(project_id).unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].subbudget.id, a.id);
    assert_eq!(listed[0].used, 170.0);
    assert_eq!(listed[1].used, 20.0);
    assert_eq!(s.subbudgets.get_subbudget(b.id).unwrap().used, 20.0);
}

#[tokio::test]
async fn subbudget_without_positions_uses_nothing() {
    let s = services();
    let project_id = project(&s, 10.0).await;
    let sub = s
        .subbudgets
        .create_subbudget(project_id, SubbudgetPayload::new("Empty", 0.0, None))
        .await
        .unwrap();

    let view = s.subbudgets.get_subbudget(sub.id).unwrap();
    assert_eq!(view.used, 0.0);
    assert_eq!(view.percent_used, 0.0);
    assert!(!view.warning);
}

#[tokio::test]
async fn scenario_warning_reached() {
    let s = services();
    let project_id = project(&s, 1000.0).await;
    let sub = s
        .subbudgets
        .create_subbudget(project_id, SubbudgetPayload::new("Kitchen", 500.0, Some(0.8)))
        .await
        .unwrap();
    s.positions
        .create_position(sub.id, PositionPayload::new("Oven", 450.0, 0.0, false))
        .await
        .unwrap();

    let view = s.subbudgets.get_subbudget(sub.id).unwrap();
    assert_eq!(view.used, 450.0);
    assert!(view.warning);
    assert_eq!(s.projects.get_project_summary(project_id).unwrap().used, 450.0);
}

#[tokio::test]
async fn update_keeps_owner_and_replaces_fields() {
    let s = services();
    let project_id = project(&s, 10.0).await;
    let sub = s
        .subbudgets
        .create_subbudget(project_id, SubbudgetPayload::new("Before", 5.0, None))
        .await
        .unwrap();

    let payload = SubbudgetPayload {
        name: Some("After".to_string()),
        budget: Some(NumberInput::Text("7".to_string())),
        threshold: Some(NumberInput::Number(0.5)),
    };
    let updated = s.subbudgets.update_subbudget(sub.id, payload).await.unwrap();

    assert_eq!(updated.project_id, project_id);
    assert_eq!(updated.name, "After");
    assert_eq!(updated.budget, 7.0);
    assert_eq!(updated.threshold, 0.5);
}

#[tokio::test]
async fn update_missing_subbudget_is_not_found() {
    let s = services();
    let err = s
        .subbudgets
        .update_subbudget(9, SubbudgetPayload::new("Nope", 1.0, Some(0.9)))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_cascades_to_positions() {
    let s = services();
    let project_id = project(&s, 10.0).await;
    let sub = s
        .subbudgets
        .create_subbudget(project_id, SubbudgetPayload::new("Gone", 5.0, None))
        .await
        .unwrap();
    for i in 0..3 {
        s.positions
            .create_position(sub.id, PositionPayload::new(format!("p{i}"), 1.0, 0.0, false))
            .await
            .unwrap();
    }

    assert_eq!(s.subbudgets.delete_subbudget(sub.id).await.unwrap(), 1);
    assert_eq!(s.store.position_count(), 0);
    assert!(s.subbudgets.get_subbudget(sub.id).unwrap_err().is_not_found());
    assert_eq!(s.subbudgets.delete_subbudget(sub.id).await.unwrap(), 0);
}
