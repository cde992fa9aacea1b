use chrono::{DateTime, TimeDelta, Utc};

use crate::models::ReminderSettings;

/// When the next feeding reminder is due: `interval_hours` after the last feeding.
/// None when reminders are off or nothing has been logged yet.
pub fn next_reminder_due(
    settings: &ReminderSettings,
    last_feeding: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    if !settings.enabled {
        return None;
    }
    last_feeding.map(|t| t + TimeDelta::hours(settings.interval_hours as i64))
}
