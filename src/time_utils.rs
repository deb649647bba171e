// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and parsing.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Extract the UTC calendar day from a stored timestamp.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates. Returns `None`
/// for anything unparsable so date-bucketed metrics skip the record instead
/// of failing the whole computation.
pub fn utc_calendar_day(timestamp: &str) -> Option<NaiveDate> {
    if let Ok(date) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(date.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(timestamp.get(..10)?, "%Y-%m-%d").ok()
}
