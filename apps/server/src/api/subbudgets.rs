use std::sync::Arc;

use crate::{
    api::extract::{JsonBody, Path},
    error::ApiResult,
    main_lib::AppState,
    models::{IdResponse, StatusResponse, Subbudget, SubbudgetInput},
};
use axum::{extract::State, routing::get, Json, Router};

#[utoipa::path(
    get,
    path = "/api/projects/{id}/subbudgets",
    params(("id" = i64, Path, description = "Project id")),
    responses((status = 200, body = [Subbudget]), (status = 404, description = "Unknown project"))
)]
pub async fn list_subbudgets(
    Path(project_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Subbudget>>> {
    let subbudgets = state.subbudget_service.get_subbudgets(project_id)?;
    Ok(Json(subbudgets.into_iter().map(Subbudget::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/projects/{id}/subbudgets",
    params(("id" = i64, Path, description = "Project id")),
    request_body = SubbudgetInput,
    responses((status = 200, body = IdResponse), (status = 404, description = "Unknown project"))
)]
pub async fn create_subbudget(
    Path(project_id): Path<i64>,
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<SubbudgetInput>,
) -> ApiResult<Json<IdResponse>> {
    let created = state
        .subbudget_service
        .create_subbudget(project_id, input.into())
        .await?;
    Ok(Json(IdResponse { id: created.id }))
}

#[utoipa::path(
    get,
    path = "/api/subbudgets/{id}",
    params(("id" = i64, Path, description = "Sub-budget id")),
    responses((status = 200, body = Subbudget), (status = 404, description = "Unknown sub-budget"))
)]
pub async fn get_subbudget(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Subbudget>> {
    let subbudget = state.subbudget_service.get_subbudget(id)?;
    Ok(Json(Subbudget::from(subbudget)))
}

#[utoipa::path(
    put,
    path = "/api/subbudgets/{id}",
    params(("id" = i64, Path, description = "Sub-budget id")),
    request_body = SubbudgetInput,
    responses((status = 200, body = StatusResponse), (status = 404, description = "Unknown sub-budget"))
)]
pub async fn update_subbudget(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<SubbudgetInput>,
) -> ApiResult<Json<StatusResponse>> {
    state
        .subbudget_service
        .update_subbudget(id, input.into())
        .await?;
    Ok(Json(StatusResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/subbudgets/{id}",
    params(("id" = i64, Path, description = "Sub-budget id")),
    responses((status = 200, body = StatusResponse))
)]
pub async fn delete_subbudget(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StatusResponse>> {
    state.subbudget_service.delete_subbudget(id).await?;
    Ok(Json(StatusResponse::ok()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/projects/{id}/subbudgets",
            get(list_subbudgets).post(create_subbudget),
        )
        .route(
            "/subbudgets/{id}",
            get(get_subbudget)
                .put(update_subbudget)
                .delete(delete_subbudget),
        )
}
