//! Activity log aggregation: a fixed 7-day window of per-calendar-day
//! buckets for the chart, and a stably sorted detail list.

use chrono::{Days, Local, NaiveDate};
use shared::domain::{DayBucket, LogEntry, LogType};

/// Buckets the given logs into the trailing 7-day window ending today in
/// local time.
pub fn bucket(logs: &[LogEntry], log_type: LogType) -> Vec<DayBucket> {
    bucket_for_day(logs, log_type, Local::now().date_naive())
}

/// Window = [today-6, today] in local calendar days: always exactly seven
/// buckets, oldest first, zero-filled for days without events. Entries of
/// other types or with out-of-window timestamps are ignored.
pub fn bucket_for_day(logs: &[LogEntry], log_type: LogType, today: NaiveDate) -> Vec<DayBucket> {
    let window_start = today - Days::new(6);
    let mut counts = [0u32; 7];

    for entry in logs {
        if entry.log_type != log_type {
            continue;
        }
        let day = entry.timestamp.with_timezone(&Local).date_naive();
        if day < window_start || day > today {
            continue;
        }
        let offset = day.signed_duration_since(window_start).num_days() as usize;
        counts[offset] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(offset, count)| DayBucket {
            date_label: (window_start + Days::new(offset as u64))
                .format("%d/%m")
                .to_string(),
            count: *count,
        })
        .collect()
}

/// Entries of the given type, most recent first. The sort is stable, so
/// entries sharing a timestamp keep their original relative order.
pub fn detail_list(logs: &[LogEntry], log_type: LogType) -> Vec<LogEntry> {
    let mut filtered: Vec<LogEntry> = logs
        .iter()
        .filter(|entry| entry.log_type == log_type)
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    filtered
}

#[cfg(test)]
#[path = "tests/logs_tests.rs"]
mod tests;
