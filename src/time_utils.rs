// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date parsing and formatting.
//!
//! Exercise dates are plain calendar dates with no time component. They are
//! stored and returned in a fixed human-readable format ("Mon Jan 01 2024")
//! and accepted from clients as `yyyy-mm-dd`.

use chrono::{NaiveDate, Utc};

/// Fixed display format for stored exercise dates.
pub const LOG_DATE_FORMAT: &str = "%a %b %d %Y";

/// Format a calendar date in the fixed log format, e.g. "Sun Jan 15 2023".
pub fn format_log_date(date: NaiveDate) -> String {
    date.format(LOG_DATE_FORMAT).to_string()
}

/// Parse a stored log date back into a calendar date.
///
/// Returns `None` for strings not in the fixed format, including "Invalid
/// Date" markers carried over from older data.
pub fn parse_log_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, LOG_DATE_FORMAT).ok()
}

/// Parse a client-supplied `yyyy-mm-dd` date. Surrounding whitespace is
/// tolerated; anything else returns `None`.
pub fn parse_ymd(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Today's calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
