use std::sync::Arc;

use crate::{
    api::extract::{JsonBody, Path},
    error::ApiResult,
    main_lib::AppState,
    models::{IdResponse, Project, ProjectInput, ProjectSummary, StatusResponse},
};
use axum::{extract::State, routing::get, Json, Router};

#[utoipa::path(get, path = "/api/projects", responses((status = 200, body = [Project])))]
pub async fn list_projects(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Project>>> {
    let projects = state.project_service.get_projects()?;
    Ok(Json(projects.into_iter().map(Project::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = ProjectInput,
    responses((status = 200, body = IdResponse), (status = 400, description = "Invalid input"))
)]
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> ApiResult<Json<IdResponse>> {
    let created = state.project_service.create_project(input.into()).await?;
    Ok(Json(IdResponse { id: created.id }))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = i64, Path, description = "Project id")),
    responses((status = 200, body = Project), (status = 404, description = "Unknown project"))
)]
pub async fn get_project(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Project>> {
    let project = state.project_service.get_project(id)?;
    Ok(Json(Project::from(project)))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}/summary",
    params(("id" = i64, Path, description = "Project id")),
    responses((status = 200, body = ProjectSummary), (status = 404, description = "Unknown project"))
)]
pub async fn get_project_summary(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ProjectSummary>> {
    let summary = state.project_service.get_project_summary(id)?;
    Ok(Json(ProjectSummary::from(summary)))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(("id" = i64, Path, description = "Project id")),
    request_body = ProjectInput,
    responses((status = 200, body = StatusResponse), (status = 404, description = "Unknown project"))
)]
pub async fn update_project(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> ApiResult<Json<StatusResponse>> {
    state.project_service.update_project(id, input.into()).await?;
    Ok(Json(StatusResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = i64, Path, description = "Project id")),
    responses((status = 200, body = StatusResponse))
)]
pub async fn delete_project(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StatusResponse>> {
    state.project_service.delete_project(id).await?;
    Ok(Json(StatusResponse::ok()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/projects/{id}/summary", get(get_project_summary))
}
