// Folds feeding records into a bucket skeleton.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Serialize, Serializer};

use super::Locale;
use super::labeler::{
    build_daily_skeleton, build_hourly_skeleton, build_weekly_skeleton, daily_window, day_label,
    hour_label, hourly_window, week_label, weekly_window,
};
use crate::models::FeedingRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub label: String,
    pub total_amount: u64,
    pub count: u32,
}

/// Ordered buckets plus a label -> position index. Output order is always skeleton order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rollup {
    buckets: Vec<Bucket>,
    index: HashMap<String, usize>,
}

impl Rollup {
    /// Zero-filled skeleton. A repeated label keeps its first position.
    pub fn from_labels(labels: impl IntoIterator<Item = String>) -> Self {
        let mut buckets = Vec::new();
        let mut index = HashMap::new();
        for label in labels {
            if index.contains_key(&label) {
                continue;
            }
            index.insert(label.clone(), buckets.len());
            buckets.push(Bucket {
                label,
                total_amount: 0,
                count: 0,
            });
        }
        Self { buckets, index }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&Bucket> {
        self.index.get(label).map(|&i| &self.buckets[i])
    }

    pub fn labels(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn total_amount(&self) -> u64 {
        self.buckets.iter().map(|b| b.total_amount).sum()
    }

    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count as u64).sum()
    }

    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }

    /// Adds one feeding to the bucket named `label`. Returns false when no bucket matches.
    fn add(&mut self, label: &str, amount: u32) -> bool {
        let Some(&i) = self.index.get(label) else {
            return false;
        };
        let bucket = &mut self.buckets[i];
        bucket.total_amount += amount as u64;
        bucket.count += 1;
        true
    }
}

impl Serialize for Rollup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.buckets.serialize(serializer)
    }
}

/// Time range a rollup covers: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl Window {
    pub fn contains(&self, t: &DateTime<Utc>) -> bool {
        let t = t.fixed_offset();
        t >= self.start && t < self.end
    }
}

/// Folds `records` into `skeleton`. Records outside `window` are skipped; records whose key
/// matches no bucket are dropped silently. `key_fn` sees feeding times in the window's offset.
pub fn aggregate<F>(
    records: &[FeedingRecord],
    mut skeleton: Rollup,
    key_fn: F,
    window: &Window,
) -> Rollup
where
    F: Fn(DateTime<FixedOffset>) -> String,
{
    let offset = *window.start.offset();
    let mut dropped = 0usize;
    for record in records.iter().filter(|r| window.contains(&r.feeding_time)) {
        let label = key_fn(record.feeding_time.with_timezone(&offset));
        if !skeleton.add(&label, record.amount) {
            dropped += 1;
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, "feedings matched no bucket");
    }
    skeleton
}

/// The three chart series for one set of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rollups {
    pub hourly: Rollup,
    pub daily: Rollup,
    pub weekly: Rollup,
}

pub fn compute_rollups(
    records: &[FeedingRecord],
    now: DateTime<FixedOffset>,
    locale: Locale,
) -> Rollups {
    let hourly = aggregate(
        records,
        build_hourly_skeleton(now),
        hour_label,
        &hourly_window(now),
    );
    let daily = aggregate(
        records,
        build_daily_skeleton(now, locale),
        |t| day_label(t, locale),
        &daily_window(now),
    );
    let weekly = aggregate(
        records,
        build_weekly_skeleton(now, locale),
        |t| week_label(t, now, locale),
        &weekly_window(now),
    );
    Rollups {
        hourly,
        daily,
        weekly,
    }
}
