// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise-Tracker: log exercises against users and query their logs
//!
//! This crate provides the backend API for creating users, appending
//! exercises to a user's log, and retrieving date-filtered views of it.

pub mod config;
pub mod db;
pub mod error;
pub mod log_query;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
