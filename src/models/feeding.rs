// Feeding record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::ValidationError;

pub const MIN_AMOUNT_ML: u32 = 1;
pub const MAX_AMOUNT_ML: u32 = 500;
pub const MAX_NOTE_LEN: usize = 500;

/// How the feeding was given; serializes to lowercase JSON (e.g. "bottle").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedingSide {
    Left,
    Right,
    Bottle,
}

impl FeedingSide {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedingSide::Left => "left",
            FeedingSide::Right => "right",
            FeedingSide::Bottle => "bottle",
        }
    }

    /// Parse the stored column value; unknown values read as None.
    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "left" => Some(FeedingSide::Left),
            "right" => Some(FeedingSide::Right),
            "bottle" => Some(FeedingSide::Bottle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingRecord {
    pub id: String,
    pub baby_id: String,
    pub feeding_time: DateTime<Utc>,
    /// Volume in ml.
    pub amount: u32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<FeedingSide>,
}

/// POST /api/feeding-records body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedingRecord {
    pub baby_id: String,
    pub feeding_time: DateTime<Utc>,
    pub amount: u32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub side: Option<FeedingSide>,
}

/// PATCH /api/feeding-records/{id} body. An empty `notes` string clears the note;
/// `"side": null` clears the side, an absent `side` leaves it unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingRecordPatch {
    #[serde(default)]
    pub feeding_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub amount: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub side: Option<Option<FeedingSide>>,
}

/// Maps a present field (including `null`) to `Some`; absent fields fall back to `default`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn validate_amount(amount: u32) -> Result<(), ValidationError> {
    if !(MIN_AMOUNT_ML..=MAX_AMOUNT_ML).contains(&amount) {
        return Err(ValidationError::AmountOutOfRange {
            got: amount,
            min: MIN_AMOUNT_ML,
            max: MAX_AMOUNT_ML,
        });
    }
    Ok(())
}

fn validate_notes(notes: Option<&str>) -> Result<(), ValidationError> {
    let len = notes.map(|n| n.chars().count()).unwrap_or(0);
    if len > MAX_NOTE_LEN {
        return Err(ValidationError::NoteTooLong {
            len,
            max: MAX_NOTE_LEN,
        });
    }
    Ok(())
}

/// Blank notes are stored as absent.
fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

impl NewFeedingRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(self.amount)?;
        validate_notes(self.notes.as_deref())
    }

    /// Builds the stored record under a freshly generated id.
    pub fn into_record(self) -> FeedingRecord {
        FeedingRecord {
            id: uuid::Uuid::new_v4().to_string(),
            baby_id: self.baby_id,
            feeding_time: self.feeding_time,
            amount: self.amount,
            notes: normalize_notes(self.notes),
            side: self.side,
        }
    }
}

impl FeedingRecordPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        validate_notes(self.notes.as_deref())
    }

    pub fn apply(self, record: &mut FeedingRecord) {
        if let Some(feeding_time) = self.feeding_time {
            record.feeding_time = feeding_time;
        }
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        if self.notes.is_some() {
            record.notes = normalize_notes(self.notes);
        }
        if let Some(side) = self.side {
            record.side = side;
        }
    }
}
