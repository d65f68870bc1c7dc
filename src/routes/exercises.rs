// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise logging and filtered log retrieval.

use crate::error::{AppError, Result};
use crate::log_query::LogQuery;
use crate::models::Exercise;
use crate::time_utils::{format_log_date, parse_ymd, today_utc};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Form, Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Exercise routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/{id}/exercises", post(add_exercise))
        .route("/api/users/{id}/logs", get(get_logs))
}

// ─── Add Exercise ────────────────────────────────────────────

/// Form body for exercise creation. Everything arrives as strings;
/// `duration` and `date` are validated here instead of being persisted raw.
#[derive(Deserialize)]
struct ExerciseForm {
    description: Option<String>,
    duration: Option<String>,
    date: Option<String>,
}

/// Flattened response for a newly logged exercise.
#[derive(Serialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub id: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

/// Append an exercise to a user's log.
async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Form(form): Form<ExerciseForm>,
) -> Result<(StatusCode, Json<ExerciseResponse>)> {
    let description = form
        .description
        .ok_or_else(|| AppError::BadRequest("Missing form field 'description'".to_string()))?;
    let duration = parse_duration(form.duration.as_deref())?;
    let date = resolve_date(form.date.as_deref())?;

    let exercise = Exercise {
        description,
        duration,
        date: format_log_date(date),
    };

    tracing::debug!(
        user_id = %user_id,
        date = %exercise.date,
        "Logging exercise"
    );

    let user = state
        .db
        .append_exercise(&user_id, &exercise)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    Ok((
        StatusCode::CREATED,
        Json(ExerciseResponse {
            username: user.username,
            id: user.id,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }),
    ))
}

/// Parse the `duration` form field as a base-10 integer.
fn parse_duration(raw: Option<&str>) -> Result<i64> {
    let raw =
        raw.ok_or_else(|| AppError::BadRequest("Missing form field 'duration'".to_string()))?;
    raw.trim().parse().map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid 'duration' value '{}': expected a base-10 integer",
            raw
        ))
    })
}

/// Resolve the optional `date` form field: absent or empty means today (UTC),
/// anything else must be a valid `yyyy-mm-dd` date.
fn resolve_date(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        None => Ok(today_utc()),
        Some(raw) if raw.trim().is_empty() => Ok(today_utc()),
        Some(raw) => parse_ymd(raw).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid 'date' value '{}': expected yyyy-mm-dd", raw))
        }),
    }
}

// ─── Filtered Log ────────────────────────────────────────────

#[derive(Deserialize)]
struct LogsParams {
    /// Inclusive range start (yyyy-mm-dd)
    from: Option<String>,
    /// Inclusive range end (yyyy-mm-dd)
    to: Option<String>,
    /// Maximum number of entries to return
    limit: Option<String>,
}

/// One log entry as returned to clients.
#[derive(Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

/// Filtered log response.
#[derive(Serialize)]
pub struct LogResponse {
    pub id: String,
    pub username: String,
    /// Number of entries in `log` after filtering and truncation
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// Get a user's exercise log with optional date-range and count filtering.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<LogsParams>,
) -> Result<Json<LogResponse>> {
    let query = LogQuery {
        from: parse_date_param("from", params.from.as_deref())?,
        to: parse_date_param("to", params.to.as_deref())?,
        limit: parse_limit_param(params.limit.as_deref())?,
    };

    tracing::debug!(
        user_id = %user_id,
        from = ?query.from,
        to = ?query.to,
        limit = ?query.limit,
        "Fetching log"
    );

    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let log: Vec<LogEntry> = query
        .apply(user.log)
        .into_iter()
        .map(LogEntry::from)
        .collect();

    Ok(Json(LogResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}

/// Parse an optional `yyyy-mm-dd` query parameter. An empty value counts as
/// absent, matching the form-field rules above.
fn parse_date_param(name: &str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_ymd(raw).map(Some).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid '{}' value '{}': expected yyyy-mm-dd",
                name, raw
            ))
        }),
    }
}

/// Parse the optional `limit` query parameter as a non-negative integer.
fn parse_limit_param(raw: Option<&str>) -> Result<Option<usize>> {
    match raw {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid 'limit' value '{}': expected a non-negative integer",
                raw
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration(Some("30")).unwrap(), 30);
        assert_eq!(parse_duration(Some(" 45 ")).unwrap(), 45);
        assert_eq!(parse_duration(Some("-10")).unwrap(), -10);
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(matches!(
            parse_duration(Some("banana")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_duration(Some("30.5")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(parse_duration(None), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_resolve_date_defaults_to_today() {
        assert_eq!(resolve_date(None).unwrap(), today_utc());
        assert_eq!(resolve_date(Some("")).unwrap(), today_utc());
    }

    #[test]
    fn test_resolve_date_parses_and_rejects() {
        let date = resolve_date(Some("2023-01-15")).unwrap();
        assert_eq!(format_log_date(date), "Sun Jan 15 2023");

        assert!(matches!(
            resolve_date(Some("January 15th")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            resolve_date(Some("2023-13-01")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_parse_date_param_names_the_field() {
        let err = parse_date_param("from", Some("junk")).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("'from'")),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_limit_param() {
        assert_eq!(parse_limit_param(None).unwrap(), None);
        assert_eq!(parse_limit_param(Some("")).unwrap(), None);
        assert_eq!(parse_limit_param(Some("5")).unwrap(), Some(5));
        assert_eq!(parse_limit_param(Some("0")).unwrap(), Some(0));

        assert!(matches!(
            parse_limit_param(Some("-1")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_limit_param(Some("many")),
            Err(AppError::BadRequest(_))
        ));
    }
}
