//! User profile HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::middleware::CurrentUser;
use crate::services::user::{UpdateUserInput, UserService};
use crate::AppState;

/// Get the current user's profile
pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
) -> impl IntoResponse {
    let service = UserService::new(state.db.clone());

    match service.get_user(current_user.user_id).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Partially update the current user's profile
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Json(input): Json<UpdateUserInput>,
) -> impl IntoResponse {
    let service = UserService::new(state.db.clone());

    match service.update_user(current_user.user_id, input).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => e.into_response(),
    }
}
