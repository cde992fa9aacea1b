// Feeding record CRUD

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use super::AppState;
use super::error::{ApiError, ApiResult};
use crate::models::{FeedingRecord, FeedingRecordPatch, NewFeedingRecord};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FeedingQuery {
    baby_id: Option<String>,
}

pub(super) async fn list_feedings(
    State(state): State<AppState>,
    query: Result<Query<FeedingQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<FeedingRecord>>> {
    let Query(query) = query?;
    Ok(Json(state.repo.list_feedings(query.baby_id.as_deref()).await?))
}

pub(super) async fn create_feeding(
    State(state): State<AppState>,
    body: Result<Json<NewFeedingRecord>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<FeedingRecord>)> {
    let Json(body) = body?;
    body.validate()?;
    state.require_baby(&body.baby_id).await?;
    let record = body.into_record();
    state.repo.insert_feeding(&record).await?;
    tracing::info!(feeding_id = %record.id, baby_id = %record.baby_id, amount = record.amount, "feeding recorded");
    Ok((StatusCode::CREATED, Json(record)))
}

pub(super) async fn update_feeding(
    State(state): State<AppState>,
    Path(id): Path<String>,
    patch: Result<Json<FeedingRecordPatch>, JsonRejection>,
) -> ApiResult<Json<FeedingRecord>> {
    let Json(patch) = patch?;
    patch.validate()?;
    let mut record = state
        .repo
        .get_feeding(&id)
        .await?
        .ok_or(ApiError::NotFound("feeding record"))?;
    patch.apply(&mut record);
    if !state.repo.update_feeding(&record).await? {
        return Err(ApiError::NotFound("feeding record"));
    }
    tracing::info!(feeding_id = %record.id, "feeding updated");
    Ok(Json(record))
}

pub(super) async fn delete_feeding(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if !state.repo.delete_feeding(&id).await? {
        return Err(ApiError::NotFound("feeding record"));
    }
    tracing::info!(feeding_id = %id, "feeding deleted");
    Ok(StatusCode::NO_CONTENT)
}
