use std::sync::Arc;

use crate::config::Config;
use budgetbook_core::{
    positions::{PositionService, PositionServiceTrait},
    projects::{ProjectService, ProjectServiceTrait},
    subbudgets::{SubbudgetService, SubbudgetServiceTrait},
};
use budgetbook_storage_sqlite::{
    db::{self, WriteHandle},
    positions::PositionRepository,
    projects::ProjectRepository,
    subbudgets::SubbudgetRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub project_service: Arc<dyn ProjectServiceTrait + Send + Sync>,
    pub subbudget_service: Arc<dyn SubbudgetServiceTrait + Send + Sync>,
    pub position_service: Arc<dyn PositionServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("BB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = WriteHandle::new(pool.clone());

    let project_repo = Arc::new(ProjectRepository::new(pool.clone(), writer.clone()));
    let subbudget_repo = Arc::new(SubbudgetRepository::new(pool.clone(), writer.clone()));
    let position_repo = Arc::new(PositionRepository::new(pool.clone(), writer));

    let subbudget_service = Arc::new(SubbudgetService::new(
        subbudget_repo.clone(),
        project_repo.clone(),
        position_repo.clone(),
    ));
    let position_service = Arc::new(PositionService::new(position_repo, subbudget_repo));
    let project_service = Arc::new(ProjectService::new(
        project_repo,
        subbudget_service.clone(),
    ));

    Ok(Arc::new(AppState {
        project_service,
        subbudget_service,
        position_service,
    }))
}
