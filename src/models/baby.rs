// Baby profile

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

pub const MAX_NAME_LEN: usize = 100;
pub const DEFAULT_AVATAR_COLOR: &str = "bg-primary/10";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baby {
    pub id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub avatar_color: String,
    pub created_at: DateTime<Utc>,
}

/// POST /api/babies body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBaby {
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub avatar_color: Option<String>,
}

/// PATCH /api/babies/{id} body; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabyPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub avatar_color: Option<String>,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

fn validate_birth_date(birth_date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if birth_date > today {
        return Err(ValidationError::BirthDateInFuture(birth_date));
    }
    Ok(())
}

impl NewBaby {
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_birth_date(self.birth_date, today)
    }
}

impl BabyPatch {
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(birth_date) = self.birth_date {
            validate_birth_date(birth_date, today)?;
        }
        Ok(())
    }

    /// Applies the present fields to `baby`. Names are stored trimmed.
    pub fn apply(self, baby: &mut Baby) {
        if let Some(name) = self.name {
            baby.name = name.trim().to_string();
        }
        if let Some(birth_date) = self.birth_date {
            baby.birth_date = birth_date;
        }
        if let Some(avatar_color) = self.avatar_color {
            baby.avatar_color = avatar_color;
        }
    }
}
