// Reminder settings per baby

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use super::AppState;
use super::error::ApiResult;
use crate::models::ReminderSettings;

pub(super) async fn get_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReminderSettings>> {
    state.require_baby(&id).await?;
    Ok(Json(state.reminder_settings(&id).await?))
}

pub(super) async fn put_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    settings: Result<Json<ReminderSettings>, JsonRejection>,
) -> ApiResult<Json<ReminderSettings>> {
    let Json(settings) = settings?;
    settings.validate()?;
    state.require_baby(&id).await?;
    state.repo.save_reminder(&id, &settings).await?;
    tracing::info!(
        baby_id = %id,
        enabled = settings.enabled,
        interval_hours = settings.interval_hours,
        "reminder saved"
    );
    Ok(Json(settings))
}
