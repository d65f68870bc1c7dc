//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    /// User documents, each embedding its exercise log
    pub const USERS: &str = "users";
}
