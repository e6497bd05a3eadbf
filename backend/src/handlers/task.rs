//! Task management HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::middleware::CurrentUser;
use crate::services::task::{
    CreateTaskInput, TaskService, TransitionStatusInput, UpdateTaskInput,
};
use crate::AppState;

/// List all tasks for an area
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(area_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = TaskService::new(state.db.clone());

    match service.get_tasks(current_user.user_id, area_id).await {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a task under an area
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(area_id): Path<Uuid>,
    Json(input): Json<CreateTaskInput>,
) -> impl IntoResponse {
    let service = TaskService::new(state.db.clone());

    match service
        .create_task(current_user.user_id, area_id, input)
        .await
    {
        Ok(task) => (StatusCode::CREATED, Json(task)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Partially update a task
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(task_id): Path<Uuid>,
    Json(input): Json<UpdateTaskInput>,
) -> impl IntoResponse {
    let service = TaskService::new(state.db.clone());

    match service
        .update_task(current_user.user_id, task_id, input)
        .await
    {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Apply a checked status transition to a task
pub async fn transition_task_status(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(task_id): Path<Uuid>,
    Json(input): Json<TransitionStatusInput>,
) -> impl IntoResponse {
    let service = TaskService::new(state.db.clone());

    match service
        .transition_status(current_user.user_id, task_id, input)
        .await
    {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a task
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(task_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = TaskService::new(state.db.clone());

    match service.delete_task(current_user.user_id, task_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
