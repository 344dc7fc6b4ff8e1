use std::sync::Arc;

use crate::{
    api::extract::{JsonBody, Path},
    error::ApiResult,
    main_lib::AppState,
    models::{IdResponse, Position, PositionInput, StatusResponse},
};
use axum::{extract::State, routing::get, Json, Router};

#[utoipa::path(
    get,
    path = "/api/subbudgets/{id}/positions",
    params(("id" = i64, Path, description = "Sub-budget id")),
    responses((status = 200, body = [Position]), (status = 404, description = "Unknown sub-budget"))
)]
pub async fn list_positions(
    Path(subbudget_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Position>>> {
    let positions = state.position_service.get_positions(subbudget_id)?;
    Ok(Json(positions.into_iter().map(Position::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/subbudgets/{id}/positions",
    params(("id" = i64, Path, description = "Sub-budget id")),
    request_body = PositionInput,
    responses((status = 200, body = IdResponse), (status = 404, description = "Unknown sub-budget"))
)]
pub async fn create_position(
    Path(subbudget_id): Path<i64>,
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<PositionInput>,
) -> ApiResult<Json<IdResponse>> {
    let created = state
        .position_service
        .create_position(subbudget_id, input.into())
        .await?;
    Ok(Json(IdResponse { id: created.id }))
}

#[utoipa::path(
    get,
    path = "/api/positions/{id}",
    params(("id" = i64, Path, description = "Position id")),
    responses((status = 200, body = Position), (status = 404, description = "Unknown position"))
)]
pub async fn get_position(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Position>> {
    let position = state.position_service.get_position(id)?;
    Ok(Json(Position::from(position)))
}

#[utoipa::path(
    put,
    path = "/api/positions/{id}",
    params(("id" = i64, Path, description = "Position id")),
    request_body = PositionInput,
    responses((status = 200, body = StatusResponse), (status = 404, description = "Unknown position"))
)]
pub async fn update_position(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<PositionInput>,
) -> ApiResult<Json<StatusResponse>> {
    state
        .position_service
        .update_position(id, input.into())
        .await?;
    Ok(Json(StatusResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/positions/{id}",
    params(("id" = i64, Path, description = "Position id")),
    responses((status = 200, body = StatusResponse))
)]
pub async fn delete_position(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StatusResponse>> {
    state.position_service.delete_position(id).await?;
    Ok(Json(StatusResponse::ok()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/subbudgets/{id}/positions",
            get(list_positions).post(create_position),
        )
        .route(
            "/positions/{id}",
            get(get_position)
                .put(update_position)
                .delete(delete_position),
        )
}
