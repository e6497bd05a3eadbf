//! Note management HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::middleware::CurrentUser;
use crate::services::note::{CreateNoteInput, NoteService};
use crate::AppState;

/// List all notes for an area
pub async fn list_notes(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(area_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = NoteService::new(state.db.clone());

    match service.get_notes(current_user.user_id, area_id).await {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a note under an area
pub async fn create_note(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(area_id): Path<Uuid>,
    Json(input): Json<CreateNoteInput>,
) -> impl IntoResponse {
    let service = NoteService::new(state.db.clone());

    match service
        .create_note(current_user.user_id, area_id, input)
        .await
    {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a note
pub async fn delete_note(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(note_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = NoteService::new(state.db.clone());

    match service.delete_note(current_user.user_id, note_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
