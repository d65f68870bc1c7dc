// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory filtering of a user's exercise log.
//!
//! The log endpoint fetches the whole user document and narrows the log on
//! the server side: an optional inclusive date range first, then an optional
//! count limit. Entries keep their insertion order throughout.

use chrono::NaiveDate;

use crate::models::Exercise;
use crate::time_utils::{parse_log_date, today_utc};

/// Parsed query options for a log request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogQuery {
    /// Inclusive lower bound on the entry date.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the entry date.
    pub to: Option<NaiveDate>,
    /// Keep at most this many entries after filtering.
    pub limit: Option<usize>,
}

impl LogQuery {
    /// Apply the date-range filter and the count limit to a log.
    ///
    /// The range is only consulted when at least one bound was supplied.
    /// An absent `from` falls back to the Unix epoch date, an absent `to`
    /// to today (UTC), both inclusive at calendar-day granularity. Entries
    /// whose stored date string does not parse are dropped by the range
    /// filter but pass through an unfiltered query untouched.
    pub fn apply(&self, mut log: Vec<Exercise>) -> Vec<Exercise> {
        if self.from.is_some() || self.to.is_some() {
            // NaiveDate::default() is 1970-01-01
            let lower = self.from.unwrap_or_default();
            let upper = self.to.unwrap_or_else(today_utc);
            log.retain(|entry| match parse_log_date(&entry.date) {
                Some(date) => date >= lower && date <= upper,
                None => false,
            });
        }

        if let Some(limit) = self.limit {
            log.truncate(limit);
        }

        log
    }
}
