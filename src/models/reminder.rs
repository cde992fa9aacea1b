// Per-baby feeding reminder settings (client-side toggle; no OS notification wiring)

use serde::{Deserialize, Serialize};

use super::ValidationError;

pub const MIN_REMINDER_INTERVAL_HOURS: u32 = 1;
pub const MAX_REMINDER_INTERVAL_HOURS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    pub enabled: bool,
    pub interval_hours: u32,
}

impl ReminderSettings {
    /// Settings reported for a baby that never saved any.
    pub fn disabled(interval_hours: u32) -> Self {
        Self {
            enabled: false,
            interval_hours,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_REMINDER_INTERVAL_HOURS..=MAX_REMINDER_INTERVAL_HOURS)
            .contains(&self.interval_hours)
        {
            return Err(ValidationError::IntervalOutOfRange {
                got: self.interval_hours,
                min: MIN_REMINDER_INTERVAL_HOURS,
                max: MAX_REMINDER_INTERVAL_HOURS,
            });
        }
        Ok(())
    }
}
