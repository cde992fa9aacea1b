// Bucket skeletons and the key functions that map a feeding time onto them.
// Skeleton labels and keys share the same truncation + formatting helpers below;
// a mismatch would silently drop records.

use chrono::{DateTime, Datelike, FixedOffset, TimeDelta, Timelike, Weekday};

use super::Locale;
use super::aggregator::{Rollup, Window};

pub const HOURLY_BUCKETS: usize = 24;
pub const DAILY_BUCKETS: usize = 7;
pub const WEEKLY_BUCKETS: usize = 4;

/// Weeks start on Monday for every locale.
pub const WEEK_START: Weekday = Weekday::Mon;

/// Truncates to the start of the wall-clock hour in `t`'s offset.
pub fn start_of_hour(t: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    t - TimeDelta::seconds((t.minute() * 60 + t.second()) as i64)
        - TimeDelta::nanoseconds(t.nanosecond() as i64)
}

/// Truncates to local midnight in `t`'s offset.
pub fn start_of_day(t: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    t - TimeDelta::seconds(t.num_seconds_from_midnight() as i64)
        - TimeDelta::nanoseconds(t.nanosecond() as i64)
}

/// Midnight of the most recent WEEK_START on or before `t`.
pub fn start_of_week(t: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let days_back =
        (t.weekday().num_days_from_monday() + 7 - WEEK_START.num_days_from_monday()) % 7;
    start_of_day(t) - TimeDelta::days(days_back as i64)
}

pub fn hour_label(t: DateTime<FixedOffset>) -> String {
    format!("{:02}:00", start_of_hour(t).hour())
}

pub fn day_label(t: DateTime<FixedOffset>, locale: Locale) -> String {
    let day = start_of_day(t);
    format!("{:02} {}", day.day(), locale.month_abbrev(day.month()))
}

/// Week ordinal label relative to `now`: the week containing `now` is WEEKLY_BUCKETS,
/// older weeks count down. Weeks outside the window produce labels no skeleton holds.
pub fn week_label(
    t: DateTime<FixedOffset>,
    now: DateTime<FixedOffset>,
    locale: Locale,
) -> String {
    let weeks_back = (start_of_week(now) - start_of_week(t)).num_days().div_euclid(7);
    locale.week_label(WEEKLY_BUCKETS as i64 - weeks_back)
}

/// 24 hour buckets, oldest first, ending with the hour containing `now`. Labels are "HH:00".
pub fn build_hourly_skeleton(now: DateTime<FixedOffset>) -> Rollup {
    let current = start_of_hour(now);
    Rollup::from_labels(
        (0..HOURLY_BUCKETS)
            .rev()
            .map(|back| hour_label(current - TimeDelta::hours(back as i64))),
    )
}

/// 7 calendar-day buckets, oldest first, ending with `now`'s day. Labels are "dd MMM".
pub fn build_daily_skeleton(now: DateTime<FixedOffset>, locale: Locale) -> Rollup {
    let today = start_of_day(now);
    Rollup::from_labels(
        (0..DAILY_BUCKETS)
            .rev()
            .map(|back| day_label(today - TimeDelta::days(back as i64), locale)),
    )
}

/// 4 week buckets labeled 1..=4, oldest first. Labels are the same for every `now`;
/// membership is decided by `week_label`.
pub fn build_weekly_skeleton(_now: DateTime<FixedOffset>, locale: Locale) -> Rollup {
    Rollup::from_labels((1..=WEEKLY_BUCKETS as i64).map(|n| locale.week_label(n)))
}

/// [start of the oldest hour bucket, end of the current hour).
pub fn hourly_window(now: DateTime<FixedOffset>) -> Window {
    let current = start_of_hour(now);
    Window {
        start: current - TimeDelta::hours(HOURLY_BUCKETS as i64 - 1),
        end: current + TimeDelta::hours(1),
    }
}

/// [midnight six days ago, next midnight).
pub fn daily_window(now: DateTime<FixedOffset>) -> Window {
    let today = start_of_day(now);
    Window {
        start: today - TimeDelta::days(DAILY_BUCKETS as i64 - 1),
        end: today + TimeDelta::days(1),
    }
}

/// [start of the week three weeks back, start of next week).
pub fn weekly_window(now: DateTime<FixedOffset>) -> Window {
    let week = start_of_week(now);
    Window {
        start: week - TimeDelta::weeks(WEEKLY_BUCKETS as i64 - 1),
        end: week + TimeDelta::weeks(1),
    }
}
