use axum::{
    Router, middleware,
    routing::{get, patch},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::{SeaOrmSeriesService, SeriesService};

mod cors;
mod error;
mod series;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub series_service: Arc<dyn SeriesService>,
}

impl AppState {
    #[must_use]
    pub fn new(series_service: Arc<dyn SeriesService>) -> Self {
        Self { series_service }
    }

    #[must_use]
    pub fn from_store(store: Store) -> Self {
        Self::new(Arc::new(SeaOrmSeriesService::new(Arc::new(store))))
    }

    #[must_use]
    pub fn series(&self) -> &Arc<dyn SeriesService> {
        &self.series_service
    }
}

pub async fn create_app_state_from_config(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.database.url(),
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;

    Ok(Arc::new(AppState::from_store(store)))
}

pub fn router(state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route(
            "/series",
            get(series::list_series).post(series::create_series),
        )
        .route(
            "/series/{id}",
            get(series::get_series)
                .put(series::update_series)
                .delete(series::delete_series),
        )
        .route("/series/{id}/status", patch(series::update_status))
        .route("/series/{id}/episode", patch(series::increment_episode))
        .route("/series/{id}/upvote", patch(series::upvote_series))
        .route("/series/{id}/downvote", patch(series::downvote_series))
        .with_state(state);

    Router::new()
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors::cors_middleware))
}
