//! Exercise record embedded in a user's log.

use serde::{Deserialize, Serialize};

/// A single logged exercise.
///
/// Owned by value inside the parent [`User`](crate::models::User) document;
/// exercises have no identity of their own and are never stored or queried
/// outside their user's log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Free-form description ("run", "bench press", ...)
    pub description: String,
    /// Duration as an opaque integer (units are the client's business)
    pub duration: i64,
    /// Calendar date in the fixed `"Mon Jan 01 2024"` format, no time component
    pub date: String,
}
