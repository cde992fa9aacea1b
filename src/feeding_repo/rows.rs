// Row <-> model conversion. Instants are stored as epoch milliseconds, dates as YYYY-MM-DD.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::models::{Baby, FeedingRecord, FeedingSide};

pub(super) fn millis_to_utc(ms: i64) -> anyhow::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| anyhow::anyhow!("timestamp out of range: {}", ms))
}

pub(super) fn parse_baby_row(row: &SqliteRow) -> anyhow::Result<Baby> {
    let birth_date: String = row.try_get("birth_date")?;
    let birth_date = NaiveDate::parse_from_str(&birth_date, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid birth_date {:?}: {}", birth_date, e))?;
    Ok(Baby {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        birth_date,
        avatar_color: row.try_get("avatar_color")?,
        created_at: millis_to_utc(row.try_get("created_at")?)?,
    })
}

pub(super) fn parse_feeding_row(row: &SqliteRow) -> anyhow::Result<FeedingRecord> {
    let amount: i64 = row.try_get("amount")?;
    let side: Option<String> = row.try_get("side")?;
    Ok(FeedingRecord {
        id: row.try_get("id")?,
        baby_id: row.try_get("baby_id")?,
        feeding_time: millis_to_utc(row.try_get("feeding_time")?)?,
        amount: u32::try_from(amount)
            .map_err(|_| anyhow::anyhow!("invalid amount in feeding row: {}", amount))?,
        notes: row.try_get("notes")?,
        side: side.as_deref().and_then(FeedingSide::from_db),
    })
}
