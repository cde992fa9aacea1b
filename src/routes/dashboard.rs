// GET /api/babies/{id}/dashboard — summary cards + hourly/daily/weekly chart series.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use super::AppState;
use super::error::ApiResult;
use crate::models::{Baby, ReminderSettings};
use crate::stats::{self, DailySummary, Rollups};

#[derive(Debug, Deserialize)]
pub(super) struct DashboardQuery {
    /// Reference instant (RFC 3339); defaults to the wall clock.
    now: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Dashboard {
    baby: Baby,
    summary: DailySummary,
    #[serde(flatten)]
    rollups: Rollups,
    reminder: ReminderSettings,
    next_reminder_due: Option<DateTime<Utc>>,
}

pub(super) async fn dashboard(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> ApiResult<Json<Dashboard>> {
    let Query(query) = query?;
    let baby = state.require_baby(&id).await?;
    let offset = state.config.stats.offset();
    let now = query
        .now
        .map(|t| t.with_timezone(&offset))
        .unwrap_or_else(|| Utc::now().with_timezone(&offset));

    let records = state.repo.list_feedings(Some(&id)).await?;
    let summary = stats::compute_daily_summary(&records, &id, now);
    let rollups = stats::compute_rollups(&records, now, state.config.stats.locale);
    let reminder = state.reminder_settings(&id).await?;
    let next_reminder_due = stats::next_reminder_due(&reminder, summary.last_feeding);

    Ok(Json(Dashboard {
        baby,
        summary,
        rollups,
        reminder,
        next_reminder_due,
    }))
}
