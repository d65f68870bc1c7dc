//! User model for storage and API.

use serde::{Deserialize, Serialize};

use crate::models::Exercise;

/// User document stored in Firestore.
///
/// The document ID is assigned by Firestore on insert and mapped back into
/// `id` through the `_firestore_id` alias; it is never written as a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned document ID
    #[serde(alias = "_firestore_id", skip_serializing, default)]
    pub id: String,
    /// Display name; neither unique nor required to be non-empty
    pub username: String,
    /// Exercise log in insertion order (chronological entry order, not
    /// sorted by exercise date)
    #[serde(default)]
    pub log: Vec<Exercise>,
}

impl User {
    /// A brand-new user with an empty log, ready to insert.
    pub fn new(username: String) -> Self {
        Self {
            id: String::new(),
            username,
            log: Vec::new(),
        }
    }
}
