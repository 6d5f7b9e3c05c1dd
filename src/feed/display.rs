//! Human-readable projections of feed posts

use chrono::{DateTime, Utc};

use super::types::FeedPost;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;
const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

const UNITS: [(i64, &str); 5] = [
    (SECONDS_PER_YEAR, "year"),
    (SECONDS_PER_MONTH, "month"),
    (SECONDS_PER_DAY, "day"),
    (SECONDS_PER_HOUR, "hour"),
    (SECONDS_PER_MINUTE, "minute"),
];

fn pluralize(unit: &str, value: i64) -> String {
    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

/// Elapsed time from `timestamp` to `now` in the largest whole unit
///
/// Months are 30 days and years 365. Timestamps in the future read as
/// `"0 seconds"`.
#[must_use]
pub fn time_since(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);

    UNITS
        .iter()
        .map(|&(size, unit)| (seconds / size, unit))
        .find(|&(count, _)| count >= 1)
        .map_or_else(
            || pluralize("second", seconds),
            |(count, unit)| pluralize(unit, count),
        )
}

impl FeedPost {
    /// How long ago the post was created, relative to `now`
    #[must_use]
    pub fn time_since_posted(&self, now: DateTime<Utc>) -> Option<String> {
        self.timestamp.map(|ts| time_since(ts, now))
    }

    /// One-line summary used by the plain-text listing output
    #[must_use]
    pub fn summary_line(&self, now: DateTime<Utc>) -> String {
        let age = self
            .time_since_posted(now)
            .map(|age| format!("{age} ago"))
            .unwrap_or_else(|| "unknown age".to_string());

        let mut flags = String::new();
        if self.is_nsfw {
            flags.push_str(" [nsfw]");
        }
        if self.is_spoiler {
            flags.push_str(" [spoiler]");
        }

        format!(
            "{score:>6}  [{kind}] {title}{flags}  (r/{subreddit}, u/{author}, {age}, {comments} comments)",
            score = self.score,
            kind = self.kind,
            title = self.title,
            subreddit = self.subreddit,
            author = self.author,
            comments = self.comment_count,
        )
    }
}
