// Shared test helpers
#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, Utc};
use feedlog::models::FeedingRecord;

pub const TEST_CONFIG: &str = r#"
[server]
port = 5000
host = "0.0.0.0"

[database]
path = "data/test.db"
max_pool_size = 2

[stats]
locale = "tr"
utc_offset_minutes = 180
"#;

/// Parses an RFC 3339 instant, keeping its offset.
pub fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

pub fn utc(s: &str) -> DateTime<Utc> {
    at(s).with_timezone(&Utc)
}

pub fn record(id: &str, baby_id: &str, time: &str, amount: u32) -> FeedingRecord {
    FeedingRecord {
        id: id.into(),
        baby_id: baby_id.into(),
        feeding_time: utc(time),
        amount,
        notes: None,
        side: None,
    }
}
