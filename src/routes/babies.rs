// Baby profile CRUD

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;

use super::AppState;
use super::error::{ApiError, ApiResult};
use crate::models::{Baby, BabyPatch, DEFAULT_AVATAR_COLOR, FeedingRecord, NewBaby};

pub(super) async fn list_babies(State(state): State<AppState>) -> ApiResult<Json<Vec<Baby>>> {
    Ok(Json(state.repo.list_babies().await?))
}

pub(super) async fn create_baby(
    State(state): State<AppState>,
    body: Result<Json<NewBaby>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Baby>)> {
    let Json(body) = body?;
    body.validate(state.today())?;
    let baby = Baby {
        id: uuid::Uuid::new_v4().to_string(),
        name: body.name.trim().to_string(),
        birth_date: body.birth_date,
        avatar_color: body
            .avatar_color
            .unwrap_or_else(|| DEFAULT_AVATAR_COLOR.to_string()),
        created_at: Utc::now(),
    };
    state.repo.insert_baby(&baby).await?;
    tracing::info!(baby_id = %baby.id, "baby created");
    Ok((StatusCode::CREATED, Json(baby)))
}

pub(super) async fn get_baby(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Baby>> {
    Ok(Json(state.require_baby(&id).await?))
}

pub(super) async fn update_baby(
    State(state): State<AppState>,
    Path(id): Path<String>,
    patch: Result<Json<BabyPatch>, JsonRejection>,
) -> ApiResult<Json<Baby>> {
    let Json(patch) = patch?;
    patch.validate(state.today())?;
    let mut baby = state.require_baby(&id).await?;
    patch.apply(&mut baby);
    if !state.repo.update_baby(&baby).await? {
        return Err(ApiError::NotFound("baby"));
    }
    tracing::info!(baby_id = %baby.id, "baby updated");
    Ok(Json(baby))
}

pub(super) async fn delete_baby(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if !state.repo.delete_baby(&id).await? {
        return Err(ApiError::NotFound("baby"));
    }
    tracing::info!(baby_id = %id, "baby deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/babies/{id}/feeding-records — history, newest first.
pub(super) async fn list_baby_feedings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<FeedingRecord>>> {
    state.require_baby(&id).await?;
    Ok(Json(state.repo.list_feedings(Some(&id)).await?))
}
