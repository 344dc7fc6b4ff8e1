use std::sync::Arc;

use crate::{config::Config, main_lib::AppState, models};
use axum::{
    http::{HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

mod extract;
mod health;
mod positions;
mod projects;
mod subbudgets;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        projects::list_projects,
        projects::create_project,
        projects::get_project,
        projects::get_project_summary,
        projects::update_project,
        projects::delete_project,
        subbudgets::list_subbudgets,
        subbudgets::create_subbudget,
        subbudgets::get_subbudget,
        subbudgets::update_subbudget,
        subbudgets::delete_subbudget,
        positions::list_positions,
        positions::create_position,
        positions::get_position,
        positions::update_position,
        positions::delete_position,
    ),
    components(schemas(
        models::Project,
        models::ProjectSummary,
        models::ProjectInput,
        models::Subbudget,
        models::SubbudgetInput,
        models::Position,
        models::PositionInput,
        models::IdResponse,
        models::StatusResponse,
    )),
    tags((name = "budgetbook"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };
    cors.allow_methods(Any).allow_headers(Any)
}

/// Serves the bundled UI, answering unknown paths with `index.html`.
fn static_service(config: &Config) -> ServeDir<ServeFile> {
    let static_dir = std::path::PathBuf::from(&config.static_dir);
    let index_file = static_dir.join("index.html");
    ServeDir::new(static_dir).fallback(ServeFile::new(index_file))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(projects::router())
        .merge(subbudgets::router())
        .merge(positions::router());

    Router::new()
        .nest("/api", api)
        .route("/openapi.json", get(openapi_json))
        .fallback_service(static_service(config))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
