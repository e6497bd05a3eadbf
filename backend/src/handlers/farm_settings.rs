//! Farm settings HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::middleware::CurrentUser;
use crate::services::farm_settings::{
    FarmSettingsService, UpdateFarmSettingsInput, DEFAULT_FARM_NAME,
};
use crate::AppState;

/// Get the current user's farm settings, falling back to the default
/// farm name when no record exists yet
pub async fn get_farm_settings(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
) -> impl IntoResponse {
    let service = FarmSettingsService::new(state.db.clone());

    match service.get_settings(current_user.user_id).await {
        Ok(Some(settings)) => (StatusCode::OK, Json(settings)).into_response(),
        Ok(None) => (
            StatusCode::OK,
            Json(serde_json::json!({ "name": DEFAULT_FARM_NAME })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update the farm display name
pub async fn update_farm_settings(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Json(input): Json<UpdateFarmSettingsInput>,
) -> impl IntoResponse {
    let service = FarmSettingsService::new(state.db.clone());

    match service.update_settings(current_user.user_id, input).await {
        Ok(settings) => (StatusCode::OK, Json(settings)).into_response(),
        Err(e) => e.into_response(),
    }
}
