use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;

use crate::models::{MAX_REMINDER_INTERVAL_HOURS, MIN_REMINDER_INTERVAL_HOURS};
use crate::stats::Locale;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub reminder: ReminderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_pool_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// Month abbreviations and week label prefix for chart buckets.
    #[serde(default)]
    pub locale: Locale,
    /// Wall-clock offset from UTC used to truncate feedings to hours, days and weeks.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

fn default_utc_offset_minutes() -> i32 {
    180
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReminderConfig {
    /// Interval reported for babies that never saved reminder settings.
    #[serde(default = "default_interval_hours")]
    pub default_interval_hours: u32,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            default_interval_hours: default_interval_hours(),
        }
    }
}

fn default_interval_hours() -> u32 {
    3
}

impl StatsConfig {
    /// Fixed offset for bucket truncation. Validated at load time.
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.database.path.is_empty(),
            "database.path must be non-empty"
        );
        anyhow::ensure!(
            self.database.max_pool_size > 0,
            "database.max_pool_size must be > 0, got {}",
            self.database.max_pool_size
        );
        anyhow::ensure!(
            (-14 * 60..=14 * 60).contains(&self.stats.utc_offset_minutes),
            "stats.utc_offset_minutes must be within -840..=840, got {}",
            self.stats.utc_offset_minutes
        );
        anyhow::ensure!(
            (MIN_REMINDER_INTERVAL_HOURS..=MAX_REMINDER_INTERVAL_HOURS)
                .contains(&self.reminder.default_interval_hours),
            "reminder.default_interval_hours must be within {}..={}, got {}",
            MIN_REMINDER_INTERVAL_HOURS,
            MAX_REMINDER_INTERVAL_HOURS,
            self.reminder.default_interval_hours
        );
        Ok(())
    }
}
