//! Event date normalization.
//!
//! Converts heterogeneous date representations (already-canonical strings,
//! ISO datetimes, US-style dates, the `TBD` sentinel) into the canonical
//! `YYYY-MM-DD` form used as the grouping key throughout a proposal.
//!
//! Normalization works on local calendar fields, never a UTC conversion:
//! converting through UTC shifts dates near midnight across timezones and
//! corrupts the event-day display.

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::constants::TBD_DATE;

/// Normalize a raw date string to `YYYY-MM-DD`, `TBD`, or `""`.
///
/// - The exact `TBD` literal passes through unchanged.
/// - An already-canonical `YYYY-MM-DD` string passes through without
///   reparsing (reparsing canonical input is where timezone bugs creep in).
/// - Anything else is parsed against a fixed list of formats; on failure a
///   warning is logged and the empty string returned. Callers must treat
///   `""` as "drop this date".
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == TBD_DATE {
        return TBD_DATE.to_string();
    }
    if is_canonical(trimmed) {
        return trimmed.to_string();
    }

    parse_flexible(trimmed).map_or_else(
        || {
            warn!(input = trimmed, "unparseable event date; normalizing to empty");
            String::new()
        },
        format_canonical,
    )
}

/// Normalize a concrete local datetime to `YYYY-MM-DD`.
///
/// Uses the local calendar day, so a 11:30 PM event stays on its own day
/// regardless of the host's UTC offset.
pub fn normalize_local_datetime(datetime: &DateTime<Local>) -> String {
    format_canonical(datetime.date_naive())
}

/// Order two normalized dates chronologically, with `TBD` always last.
pub fn compare_event_dates(a: &str, b: &str) -> Ordering {
    match (a == TBD_DATE, b == TBD_DATE) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Canonical dates compare chronologically as plain strings.
        (false, false) => a.cmp(b),
    }
}

/// Sort a date list chronologically (`TBD` last) and drop duplicates.
pub fn sort_event_dates(dates: &mut Vec<String>) {
    dates.sort_by(|a, b| compare_event_dates(a, b));
    dates.dedup();
}

fn format_canonical(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

fn is_canonical(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn parse_flexible(input: &str) -> Option<NaiveDate> {
    // Full timestamps resolve to the local calendar day.
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.with_timezone(&Local).date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Some(datetime.date());
        }
    }
    for format in ["%m/%d/%Y", "%m/%d/%y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date);
        }
    }
    None
}
