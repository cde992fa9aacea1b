// HTTP routes

mod babies;
mod dashboard;
mod error;
mod feedings;
mod http;
mod reminder;

use axum::{
    Router,
    routing::{get, patch},
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::feeding_repo::FeedingRepo;
use crate::models::{Baby, ReminderSettings};

pub use error::{ApiError, ApiResult};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) repo: Arc<FeedingRepo>,
    pub(crate) config: AppConfig,
}

impl AppState {
    /// Today's date on the configured wall clock.
    fn today(&self) -> NaiveDate {
        Utc::now()
            .with_timezone(&self.config.stats.offset())
            .date_naive()
    }

    async fn require_baby(&self, id: &str) -> ApiResult<Baby> {
        self.repo
            .get_baby(id)
            .await?
            .ok_or(ApiError::NotFound("baby"))
    }

    /// Saved settings, or disabled with the configured default interval.
    async fn reminder_settings(&self, baby_id: &str) -> ApiResult<ReminderSettings> {
        Ok(self.repo.get_reminder(baby_id).await?.unwrap_or_else(|| {
            ReminderSettings::disabled(self.config.reminder.default_interval_hours)
        }))
    }
}

pub fn app(repo: Arc<FeedingRepo>, config: AppConfig) -> Router {
    let state = AppState { repo, config };
    Router::new()
        .route("/health", get(http::health_handler)) // GET /health
        .route("/version", get(http::version_handler)) // GET /version
        .route(
            "/api/babies",
            get(babies::list_babies).post(babies::create_baby),
        )
        .route(
            "/api/babies/{id}",
            get(babies::get_baby)
                .patch(babies::update_baby)
                .delete(babies::delete_baby),
        )
        .route(
            "/api/babies/{id}/feeding-records",
            get(babies::list_baby_feedings),
        )
        .route(
            "/api/babies/{id}/reminder",
            get(reminder::get_reminder).put(reminder::put_reminder),
        )
        .route("/api/babies/{id}/dashboard", get(dashboard::dashboard))
        .route(
            "/api/feeding-records",
            get(feedings::list_feedings).post(feedings::create_feeding),
        )
        .route(
            "/api/feeding-records/{id}",
            patch(feedings::update_feeding).delete(feedings::delete_feeding),
        )
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
