// SQLite store for baby profiles, feeding records and reminder settings.
// Every mutation is committed before the method returns.

mod rows;

use crate::models::{Baby, FeedingRecord, ReminderSettings};
use rows::{parse_baby_row, parse_feeding_row};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

const FEEDING_COLUMNS: &str = "id, baby_id, feeding_time, amount, notes, side";
const BABY_COLUMNS: &str = "id, name, birth_date, avatar_color, created_at";

pub struct FeedingRepo {
    pool: SqlitePool,
}

impl FeedingRepo {
    pub async fn connect(path: &str, max_pool_size: u32) -> anyhow::Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_pool_size)
            .connect_with(opts)
            .await?;
        Ok(Self { pool })
    }

    pub async fn init(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS babies (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                birth_date TEXT NOT NULL,
                avatar_color TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS feeding_records (
                id TEXT PRIMARY KEY,
                baby_id TEXT NOT NULL REFERENCES babies(id) ON DELETE CASCADE,
                feeding_time INTEGER NOT NULL,
                amount INTEGER NOT NULL CHECK (amount > 0),
                notes TEXT,
                side TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_feeding_baby_time ON feeding_records(baby_id, feeding_time)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reminder_settings (
                baby_id TEXT PRIMARY KEY REFERENCES babies(id) ON DELETE CASCADE,
                enabled INTEGER NOT NULL,
                interval_hours INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self, baby), fields(repo = "feeding", operation = "insert_baby", baby_id = %baby.id))]
    pub async fn insert_baby(&self, baby: &Baby) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO babies (id, name, birth_date, avatar_color, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&baby.id)
        .bind(&baby.name)
        .bind(baby.birth_date.format("%Y-%m-%d").to_string())
        .bind(&baby.avatar_color)
        .bind(baby.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// All babies, oldest profile first.
    pub async fn list_babies(&self) -> anyhow::Result<Vec<Baby>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM babies ORDER BY created_at ASC, id ASC",
            BABY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(parse_baby_row).collect()
    }

    pub async fn get_baby(&self, id: &str) -> anyhow::Result<Option<Baby>> {
        let row = sqlx::query(&format!("SELECT {} FROM babies WHERE id = $1", BABY_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(parse_baby_row).transpose()
    }

    /// Overwrites the mutable profile fields. Returns false if the baby does not exist.
    #[instrument(skip(self, baby), fields(repo = "feeding", operation = "update_baby", baby_id = %baby.id))]
    pub async fn update_baby(&self, baby: &Baby) -> anyhow::Result<bool> {
        let result = sqlx::query(
            "UPDATE babies SET name = $1, birth_date = $2, avatar_color = $3 WHERE id = $4",
        )
        .bind(&baby.name)
        .bind(baby.birth_date.format("%Y-%m-%d").to_string())
        .bind(&baby.avatar_color)
        .bind(&baby.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deletes the baby with its feeding records and reminder settings.
    #[instrument(skip(self), fields(repo = "feeding", operation = "delete_baby"))]
    pub async fn delete_baby(&self, id: &str) -> anyhow::Result<bool> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM feeding_records WHERE baby_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM reminder_settings WHERE baby_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM babies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, record), fields(repo = "feeding", operation = "insert_feeding", baby_id = %record.baby_id))]
    pub async fn insert_feeding(&self, record: &FeedingRecord) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO feeding_records (id, baby_id, feeding_time, amount, notes, side) VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&record.id)
        .bind(&record.baby_id)
        .bind(record.feeding_time.timestamp_millis())
        .bind(record.amount as i64)
        .bind(record.notes.as_deref())
        .bind(record.side.map(|s| s.as_str()))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Feeding history, newest first. `baby_id = None` lists every baby's records.
    #[instrument(skip(self), fields(repo = "feeding", operation = "list_feedings"))]
    pub async fn list_feedings(&self, baby_id: Option<&str>) -> anyhow::Result<Vec<FeedingRecord>> {
        let rows = match baby_id {
            Some(baby_id) => {
                sqlx::query(&format!(
                    "SELECT {} FROM feeding_records WHERE baby_id = $1 ORDER BY feeding_time DESC, id DESC",
                    FEEDING_COLUMNS
                ))
                .bind(baby_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {} FROM feeding_records ORDER BY feeding_time DESC, id DESC",
                    FEEDING_COLUMNS
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };
        rows.iter().map(parse_feeding_row).collect()
    }

    pub async fn get_feeding(&self, id: &str) -> anyhow::Result<Option<FeedingRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM feeding_records WHERE id = $1",
            FEEDING_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(parse_feeding_row).transpose()
    }

    #[instrument(skip(self, record), fields(repo = "feeding", operation = "update_feeding", feeding_id = %record.id))]
    pub async fn update_feeding(&self, record: &FeedingRecord) -> anyhow::Result<bool> {
        let result = sqlx::query(
            "UPDATE feeding_records SET feeding_time = $1, amount = $2, notes = $3, side = $4 WHERE id = $5",
        )
        .bind(record.feeding_time.timestamp_millis())
        .bind(record.amount as i64)
        .bind(record.notes.as_deref())
        .bind(record.side.map(|s| s.as_str()))
        .bind(&record.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(repo = "feeding", operation = "delete_feeding"))]
    pub async fn delete_feeding(&self, id: &str) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM feeding_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Saved reminder settings, or None if the baby never saved any.
    pub async fn get_reminder(&self, baby_id: &str) -> anyhow::Result<Option<ReminderSettings>> {
        let row = sqlx::query(
            "SELECT enabled, interval_hours FROM reminder_settings WHERE baby_id = $1",
        )
        .bind(baby_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let interval_hours: i64 = row.try_get("interval_hours")?;
        Ok(Some(ReminderSettings {
            enabled: row.try_get("enabled")?,
            interval_hours: u32::try_from(interval_hours)
                .map_err(|_| anyhow::anyhow!("invalid interval_hours: {}", interval_hours))?,
        }))
    }

    #[instrument(skip(self, settings), fields(repo = "feeding", operation = "save_reminder"))]
    pub async fn save_reminder(
        &self,
        baby_id: &str,
        settings: &ReminderSettings,
    ) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO reminder_settings (baby_id, enabled, interval_hours) VALUES ($1, $2, $3)
             ON CONFLICT(baby_id) DO UPDATE SET enabled = excluded.enabled, interval_hours = excluded.interval_hours",
        )
        .bind(baby_id)
        .bind(settings.enabled)
        .bind(settings.interval_hours as i64)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
