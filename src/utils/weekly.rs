//! Weekly activity bucketing.
//!
//! When a semester start date is configured, every counted item is bucketed
//! into a 1-based week index so a course staff can see activity per teaching
//! week. Week boundaries follow the calendar date in Seoul.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Seoul is UTC+9 year-round, so a fixed offset is enough.
static KST: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::east_opt(9 * 3600).unwrap());

/// Counted activity inside one week.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekActivity {
    /// Merged pull requests created in this week
    pub pull_requests: u32,
    /// Resolved issues created in this week
    pub issues: u32,
}

/// Week buckets keyed by week index, sorted for stable reporting.
pub type WeeklyActivity = BTreeMap<i64, WeekActivity>;

/// 1-based week index of `created` relative to the semester start date.
///
/// Items created before the start date land in week zero or below; callers
/// decide whether to keep or drop those buckets.
pub fn week_index(created: DateTime<Utc>, semester_start: NaiveDate) -> i64 {
    let local_date = created.with_timezone(&*KST).date_naive();
    (local_date - semester_start).num_days().div_euclid(7) + 1
}
