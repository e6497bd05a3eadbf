//! Area management HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::middleware::CurrentUser;
use crate::services::area::{AreaService, CreateAreaInput, UpdateAreaInput};
use crate::AppState;

/// List all areas for the current user
pub async fn list_areas(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
) -> impl IntoResponse {
    let service = AreaService::new(state.db.clone());

    match service.get_areas(current_user.user_id).await {
        Ok(areas) => (StatusCode::OK, Json(areas)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific area
pub async fn get_area(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(area_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = AreaService::new(state.db.clone());

    match service.get_area(current_user.user_id, area_id).await {
        Ok(area) => (StatusCode::OK, Json(area)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new area from a confirmed polygon draft
pub async fn create_area(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Json(input): Json<CreateAreaInput>,
) -> impl IntoResponse {
    let service = AreaService::new(state.db.clone());

    match service.create_area(current_user.user_id, input).await {
        Ok(area) => (StatusCode::CREATED, Json(area)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Partially update an area
pub async fn update_area(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(area_id): Path<Uuid>,
    Json(input): Json<UpdateAreaInput>,
) -> impl IntoResponse {
    let service = AreaService::new(state.db.clone());

    match service
        .update_area(current_user.user_id, area_id, input)
        .await
    {
        Ok(area) => (StatusCode::OK, Json(area)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete an area and its child tasks and notes
pub async fn delete_area(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(area_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = AreaService::new(state.db.clone());

    match service.delete_area(current_user.user_id, area_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
