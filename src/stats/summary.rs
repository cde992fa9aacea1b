// Same-day totals and all-time average for one baby.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use super::labeler::start_of_day;
use crate::models::FeedingRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub total_today: u64,
    pub count_today: u32,
    /// Mean amount over all of the baby's records, rounded half up; 0 with no records.
    pub avg_amount: u64,
    pub last_feeding: Option<DateTime<Utc>>,
}

/// Summary for `baby_id` on the calendar day containing `now` (in `now`'s offset).
/// `last_feeding` ties on identical instants go to the greatest record id.
pub fn compute_daily_summary(
    records: &[FeedingRecord],
    baby_id: &str,
    now: DateTime<FixedOffset>,
) -> DailySummary {
    let today = start_of_day(now);
    let offset = *now.offset();

    let mut total_today = 0u64;
    let mut count_today = 0u32;
    let mut total_all = 0u64;
    let mut count_all = 0u64;
    let mut last: Option<&FeedingRecord> = None;

    for record in records.iter().filter(|r| r.baby_id == baby_id) {
        total_all += record.amount as u64;
        count_all += 1;
        if start_of_day(record.feeding_time.with_timezone(&offset)) == today {
            total_today += record.amount as u64;
            count_today += 1;
        }
        let newer = match last {
            None => true,
            Some(l) => (record.feeding_time, &record.id) > (l.feeding_time, &l.id),
        };
        if newer {
            last = Some(record);
        }
    }

    DailySummary {
        total_today,
        count_today,
        avg_amount: rounded_mean(total_all, count_all),
        last_feeding: last.map(|r| r.feeding_time),
    }
}

fn rounded_mean(total: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    (total * 2 + count) / (count * 2)
}
