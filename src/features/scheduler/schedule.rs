//! Wall-clock schedules for the recurring jobs
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Weekday};
use std::fmt;

/// A cron-style trigger: every day, or one day a week, at a fixed time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Daily { at: NaiveTime },
    Weekly { weekday: Weekday, at: NaiveTime },
}

impl Schedule {
    /// Parse `"HH:MM"` (daily) or `"<weekday> HH:MM"` (weekly)
    ///
    /// Weekdays accept chrono's names and abbreviations (`sun`, `Sunday`).
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            [time] => Ok(Schedule::Daily {
                at: parse_time(time)?,
            }),
            [day, time] => {
                let weekday: Weekday = day
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid weekday '{}' in schedule", day))?;
                Ok(Schedule::Weekly {
                    weekday,
                    at: parse_time(time)?,
                })
            }
            _ => Err(anyhow::anyhow!(
                "Invalid schedule '{}': expected 'HH:MM' or '<weekday> HH:MM'",
                input
            )),
        }
    }

    fn matches_day(&self, date: NaiveDate) -> bool {
        match self {
            Schedule::Daily { .. } => true,
            Schedule::Weekly { weekday, .. } => date.weekday() == *weekday,
        }
    }

    fn at(&self) -> NaiveTime {
        match self {
            Schedule::Daily { at } | Schedule::Weekly { at, .. } => *at,
        }
    }

    /// Next fire time strictly after `now`, in `now`'s time zone
    pub fn next_after<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateTime<Tz> {
        let tz = now.timezone();
        let mut date = now.date_naive();

        // Eight days always covers one full week plus today.
        for _ in 0..8 {
            if self.matches_day(date) {
                if let Some(candidate) = resolve_local(&tz, date, self.at()) {
                    if candidate > *now {
                        return candidate;
                    }
                }
            }
            date = date.succ_opt().unwrap_or(date);
        }

        // Only reachable when every candidate fell into a DST gap.
        now.clone() + Duration::days(1)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::Daily { at } => write!(f, "daily at {}", at.format("%H:%M")),
            Schedule::Weekly { weekday, at } => {
                write!(f, "every {} at {}", weekday, at.format("%H:%M"))
            }
        }
    }
}

fn parse_time(time: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|e| anyhow::anyhow!("Invalid time '{}' in schedule: {}", time, e))
}

/// Map a local wall-clock time to an instant, taking the earlier side of a fold
/// and skipping forward an hour out of a gap
fn resolve_local<Tz: TimeZone>(tz: &Tz, date: NaiveDate, at: NaiveTime) -> Option<DateTime<Tz>> {
    let naive = date.and_time(at);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => tz.from_local_datetime(&(naive + Duration::hours(1))).earliest(),
    }
}
