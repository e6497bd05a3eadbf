//! Note service for per-area field notes
//!
//! Notes are append-only in practice: they can be created and deleted
//! but never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use shared::validation::validate_note_content;

use crate::error::{AppError, AppResult};

/// Note service scoped through area ownership
#[derive(Clone)]
pub struct NoteService {
    db: PgPool,
}

/// A note attached to an area
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub author: String,
    pub date: String,
    pub area_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a note
#[derive(Debug, Deserialize)]
pub struct CreateNoteInput {
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl NoteService {
    /// Create a new NoteService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all notes for an area
    pub async fn get_notes(&self, user_id: Uuid, area_id: Uuid) -> AppResult<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT n.id, n.content, n.author, n.date, n.area_id, n.created_at
            FROM notes n
            JOIN areas a ON a.id = n.area_id
            WHERE n.area_id = $1 AND a.user_id = $2
            ORDER BY n.created_at
            "#,
        )
        .bind(area_id)
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(notes)
    }

    /// Create a note under an area
    pub async fn create_note(
        &self,
        user_id: Uuid,
        area_id: Uuid,
        input: CreateNoteInput,
    ) -> AppResult<Note> {
        // Reject bad input before touching the database
        let content = input
            .content
            .ok_or_else(|| AppError::invalid_field("content", "Note content is required"))?;
        validate_note_content(&content)
            .map_err(|msg| AppError::invalid_field("content", msg))?;

        let author = input
            .author
            .ok_or_else(|| AppError::invalid_field("author", "Note author is required"))?;
        let date = input
            .date
            .ok_or_else(|| AppError::invalid_field("date", "Note date is required"))?;

        self.assert_area_owned(user_id, area_id).await?;

        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (content, author, date, area_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, author, date, area_id, created_at
            "#,
        )
        .bind(&content)
        .bind(&author)
        .bind(&date)
        .bind(area_id)
        .fetch_one(&self.db)
        .await?;

        Ok(note)
    }

    /// Delete a note
    pub async fn delete_note(&self, user_id: Uuid, note_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM notes n
            USING areas a
            WHERE n.id = $1 AND a.id = n.area_id AND a.user_id = $2
            "#,
        )
        .bind(note_id)
        .bind(user_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Note".to_string()));
        }

        Ok(())
    }

    async fn assert_area_owned(&self, user_id: Uuid, area_id: Uuid) -> AppResult<()> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM areas WHERE id = $1 AND user_id = $2",
        )
        .bind(area_id)
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        if exists == 0 {
            return Err(AppError::NotFound("Area".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    // Lazy pool: required fields must be rejected before any query runs.
    fn service() -> NoteService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/farmarea_unit")
            .unwrap();
        NoteService::new(pool)
    }

    #[tokio::test]
    async fn create_without_content_is_rejected_before_any_query() {
        let input = CreateNoteInput {
            content: None,
            author: Some("Maria".to_string()),
            date: Some("2026-08-20".to_string()),
        };

        let err = service()
            .create_note(Uuid::new_v4(), Uuid::new_v4(), input)
            .await
            .unwrap_err();

        assert!(
            matches!(err, AppError::Validation { field: Some(ref f), .. } if f == "content")
        );
    }

    #[tokio::test]
    async fn create_without_author_is_rejected_before_any_query() {
        let input = CreateNoteInput {
            content: Some("Soil looks dry along the east edge".to_string()),
            author: None,
            date: Some("2026-08-20".to_string()),
        };

        let err = service()
            .create_note(Uuid::new_v4(), Uuid::new_v4(), input)
            .await
            .unwrap_err();

        assert!(
            matches!(err, AppError::Validation { field: Some(ref f), .. } if f == "author")
        );
    }
}
