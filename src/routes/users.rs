// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User creation and listing routes.

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// User routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", post(create_user).get(list_users))
}

/// Form body for user creation.
#[derive(Deserialize)]
struct CreateUserForm {
    username: Option<String>,
}

/// User identity as returned by both creation and listing.
#[derive(Serialize)]
pub struct UserResponse {
    pub username: String,
    pub id: String,
}

/// Create a user with an empty exercise log.
///
/// The username is stored exactly as given: duplicates and the empty string
/// are both allowed.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateUserForm>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let username = form
        .username
        .ok_or_else(|| AppError::BadRequest("Missing form field 'username'".to_string()))?;

    tracing::debug!(username = %username, "Creating user");

    let user = state.db.create_user(&username).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            username: user.username,
            id: user.id,
        }),
    ))
}

/// List every user as `{username, id}` pairs, in store-native order.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.db.list_users().await?;

    let summaries: Vec<UserResponse> = users
        .into_iter()
        .map(|u| UserResponse {
            username: u.username,
            id: u.id,
        })
        .collect();

    Ok(Json(summaries))
}
