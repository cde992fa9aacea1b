// Model tests: JSON shape (camelCase), payload validation, patch application

mod common;

use chrono::NaiveDate;
use common::{record, utc};
use feedlog::models::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 8).unwrap()
}

fn baby() -> Baby {
    Baby {
        id: "b1".into(),
        name: "Ayşe".into(),
        birth_date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
        avatar_color: DEFAULT_AVATAR_COLOR.into(),
        created_at: utc("2024-11-03T10:00:00Z"),
    }
}

#[test]
fn test_feeding_record_serialization_camel_case() {
    let mut r = record("r1", "b1", "2025-01-08T09:00:00Z", 120);
    r.notes = Some("iyi içti".into());
    r.side = Some(FeedingSide::Bottle);
    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains("\"babyId\":\"b1\""));
    assert!(json.contains("\"feedingTime\":\"2025-01-08T09:00:00Z\""));
    assert!(json.contains("\"side\":\"bottle\""));
    let back: FeedingRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
}

#[test]
fn test_feeding_record_without_side_omits_it() {
    let r = record("r1", "b1", "2025-01-08T09:00:00Z", 120);
    let json = serde_json::to_value(&r).unwrap();
    assert!(json.get("side").is_none());
    assert!(json["notes"].is_null());
}

#[test]
fn test_baby_serialization() {
    let json = serde_json::to_value(baby()).unwrap();
    assert_eq!(json["birthDate"], "2024-11-02");
    assert_eq!(json["avatarColor"], "bg-primary/10");
    assert!(json.get("createdAt").is_some());
}

#[test]
fn test_new_feeding_rejects_negative_or_non_numeric_amount() {
    let negative = r#"{"babyId":"b1","feedingTime":"2025-01-08T09:00:00Z","amount":-5}"#;
    assert!(serde_json::from_str::<NewFeedingRecord>(negative).is_err());
    let text = r#"{"babyId":"b1","feedingTime":"2025-01-08T09:00:00Z","amount":"lots"}"#;
    assert!(serde_json::from_str::<NewFeedingRecord>(text).is_err());
    let bad_time = r#"{"babyId":"b1","feedingTime":"yesterday","amount":100}"#;
    assert!(serde_json::from_str::<NewFeedingRecord>(bad_time).is_err());
}

#[test]
fn test_new_feeding_amount_bounds() {
    let mut body: NewFeedingRecord = serde_json::from_str(
        r#"{"babyId":"b1","feedingTime":"2025-01-08T09:00:00Z","amount":1}"#,
    )
    .unwrap();
    assert!(body.validate().is_ok());
    body.amount = MAX_AMOUNT_ML;
    assert!(body.validate().is_ok());
    body.amount = 0;
    assert_eq!(
        body.validate(),
        Err(ValidationError::AmountOutOfRange {
            got: 0,
            min: MIN_AMOUNT_ML,
            max: MAX_AMOUNT_ML
        })
    );
    body.amount = 501;
    assert!(body.validate().is_err());
}

#[test]
fn test_new_feeding_note_length_and_normalization() {
    let mut body: NewFeedingRecord = serde_json::from_str(
        r#"{"babyId":"b1","feedingTime":"2025-01-08T09:00:00Z","amount":90,"notes":"   "}"#,
    )
    .unwrap();
    assert!(body.validate().is_ok());
    let stored = body.clone().into_record();
    assert_eq!(stored.notes, None);
    assert!(!stored.id.is_empty());

    body.notes = Some("x".repeat(MAX_NOTE_LEN + 1));
    assert!(matches!(
        body.validate(),
        Err(ValidationError::NoteTooLong { .. })
    ));
}

#[test]
fn test_feeding_patch_applies_present_fields() {
    let mut r = record("r1", "b1", "2025-01-08T09:00:00Z", 120);
    r.notes = Some("before".into());
    let patch: FeedingRecordPatch =
        serde_json::from_str(r#"{"amount":150,"side":"left"}"#).unwrap();
    patch.validate().unwrap();
    patch.apply(&mut r);
    assert_eq!(r.amount, 150);
    assert_eq!(r.side, Some(FeedingSide::Left));
    assert_eq!(r.notes.as_deref(), Some("before"));
    assert_eq!(r.feeding_time, utc("2025-01-08T09:00:00Z"));

    let clear: FeedingRecordPatch = serde_json::from_str(r#"{"notes":""}"#).unwrap();
    clear.apply(&mut r);
    assert_eq!(r.notes, None);
    assert_eq!(r.side, Some(FeedingSide::Left));
}

#[test]
fn test_feeding_patch_null_side_clears_it() {
    let mut r = record("r1", "b1", "2025-01-08T09:00:00Z", 120);
    r.side = Some(FeedingSide::Bottle);

    let absent: FeedingRecordPatch = serde_json::from_str(r#"{"amount":130}"#).unwrap();
    assert_eq!(absent.side, None);
    absent.apply(&mut r);
    assert_eq!(r.side, Some(FeedingSide::Bottle));

    let null: FeedingRecordPatch = serde_json::from_str(r#"{"side":null}"#).unwrap();
    assert_eq!(null.side, Some(None));
    null.apply(&mut r);
    assert_eq!(r.side, None);
    assert_eq!(r.amount, 130);
}

#[test]
fn test_new_baby_validation() {
    let ok: NewBaby = serde_json::from_str(r#"{"name":"Ayşe","birthDate":"2024-11-02"}"#).unwrap();
    assert!(ok.validate(today()).is_ok());
    assert_eq!(ok.avatar_color, None);

    let blank: NewBaby = serde_json::from_str(r#"{"name":"  ","birthDate":"2024-11-02"}"#).unwrap();
    assert_eq!(blank.validate(today()), Err(ValidationError::EmptyName));

    let future: NewBaby =
        serde_json::from_str(r#"{"name":"Can","birthDate":"2025-01-09"}"#).unwrap();
    assert!(matches!(
        future.validate(today()),
        Err(ValidationError::BirthDateInFuture(_))
    ));

    let long = NewBaby {
        name: "a".repeat(MAX_NAME_LEN + 1),
        birth_date: today(),
        avatar_color: None,
    };
    assert!(matches!(
        long.validate(today()),
        Err(ValidationError::NameTooLong { .. })
    ));
}

#[test]
fn test_baby_patch_trims_name_and_keeps_other_fields() {
    let mut b = baby();
    let patch: BabyPatch = serde_json::from_str(r#"{"name":"  Ayşe Nur "}"#).unwrap();
    patch.validate(today()).unwrap();
    patch.apply(&mut b);
    assert_eq!(b.name, "Ayşe Nur");
    assert_eq!(b.birth_date, NaiveDate::from_ymd_opt(2024, 11, 2).unwrap());
    assert_eq!(b.avatar_color, DEFAULT_AVATAR_COLOR);
}

#[test]
fn test_reminder_settings_interval_bounds() {
    let json = r#"{"enabled":true,"intervalHours":3}"#;
    let settings: ReminderSettings = serde_json::from_str(json).unwrap();
    assert!(settings.validate().is_ok());
    assert_eq!(serde_json::to_string(&settings).unwrap(), json);

    for hours in [0, 13] {
        let bad = ReminderSettings {
            enabled: true,
            interval_hours: hours,
        };
        assert!(matches!(
            bad.validate(),
            Err(ValidationError::IntervalOutOfRange { .. })
        ));
    }
}

#[test]
fn test_validation_error_messages() {
    let err = ValidationError::AmountOutOfRange {
        got: 600,
        min: 1,
        max: 500,
    };
    assert_eq!(err.to_string(), "amount must be between 1 and 500 ml, got 600");
}
