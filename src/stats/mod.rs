// Feeding statistics: bucket skeletons, record folding, daily summary.
// Pure computation; callers pass `now` explicitly.

pub mod aggregator;
pub mod labeler;
mod locale;
mod reminder;
mod summary;

pub use aggregator::{Bucket, Rollup, Rollups, Window, aggregate, compute_rollups};
pub use labeler::{
    DAILY_BUCKETS, HOURLY_BUCKETS, WEEK_START, WEEKLY_BUCKETS, build_daily_skeleton,
    build_hourly_skeleton, build_weekly_skeleton,
};
pub use locale::Locale;
pub use reminder::next_reminder_due;
pub use summary::{DailySummary, compute_daily_summary};
