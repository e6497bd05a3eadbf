//! Task service for per-area field tasks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use shared::types::TaskStatus;
use shared::validation::validate_task_title;

use crate::error::{AppError, AppResult};

/// Task service scoped through area ownership
#[derive(Clone)]
pub struct TaskService {
    db: PgPool,
}

/// A field task attached to an area
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub status: String,
    pub assignee: String,
    pub due_date: String,
    pub area_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task via the quick-add form
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskInput {
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
}

/// Input for a partial task update
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
}

/// Input for the checked status transition endpoint
#[derive(Debug, Deserialize)]
pub struct TransitionStatusInput {
    pub status: Option<TaskStatus>,
}

const TASK_COLUMNS: &str = "id, title, status, assignee, due_date, area_id, created_at";

impl TaskService {
    /// Create a new TaskService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all tasks for an area
    pub async fn get_tasks(&self, user_id: Uuid, area_id: Uuid) -> AppResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT t.id, t.title, t.status, t.assignee, t.due_date, t.area_id, t.created_at
            FROM tasks t
            JOIN areas a ON a.id = t.area_id
            WHERE t.area_id = $1 AND a.user_id = $2
            ORDER BY t.created_at
            "#,
        )
        .bind(area_id)
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(tasks)
    }

    /// Create a task under an area
    pub async fn create_task(
        &self,
        user_id: Uuid,
        area_id: Uuid,
        input: CreateTaskInput,
    ) -> AppResult<Task> {
        // Reject bad input before touching the database
        let title = input
            .title
            .ok_or_else(|| AppError::invalid_field("title", "Task title is required"))?;
        validate_task_title(&title).map_err(|msg| AppError::invalid_field("title", msg))?;

        let assignee = input
            .assignee
            .ok_or_else(|| AppError::invalid_field("assignee", "Task assignee is required"))?;
        let due_date = input
            .due_date
            .ok_or_else(|| AppError::invalid_field("dueDate", "Task due date is required"))?;
        let status = input.status.unwrap_or_default();

        self.assert_area_owned(user_id, area_id).await?;

        let task = sqlx::query_as::<_, Task>(&format!(
            r#"
            INSERT INTO tasks (title, status, assignee, due_date, area_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(&title)
        .bind(status.to_string())
        .bind(&assignee)
        .bind(&due_date)
        .bind(area_id)
        .fetch_one(&self.db)
        .await?;

        Ok(task)
    }

    /// Partially update a task. The status field keeps last-write-wins
    /// semantics here; checked transitions go through
    /// [`transition_status`](Self::transition_status).
    pub async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        input: UpdateTaskInput,
    ) -> AppResult<Task> {
        let existing = self.get_task(user_id, task_id).await?;

        if let Some(ref title) = input.title {
            validate_task_title(title).map_err(|msg| AppError::invalid_field("title", msg))?;
        }

        let title = input.title.unwrap_or(existing.title);
        let status = input
            .status
            .map(|s| s.to_string())
            .unwrap_or(existing.status);
        let assignee = input.assignee.unwrap_or(existing.assignee);
        let due_date = input.due_date.unwrap_or(existing.due_date);

        let task = sqlx::query_as::<_, Task>(&format!(
            r#"
            UPDATE tasks
            SET title = $1, status = $2, assignee = $3, due_date = $4
            WHERE id = $5
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(&title)
        .bind(&status)
        .bind(&assignee)
        .bind(&due_date)
        .bind(task_id)
        .fetch_one(&self.db)
        .await?;

        Ok(task)
    }

    /// Apply a checked status transition
    pub async fn transition_status(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        input: TransitionStatusInput,
    ) -> AppResult<Task> {
        let next = input
            .status
            .ok_or_else(|| AppError::invalid_field("status", "Target status is required"))?;

        let existing = self.get_task(user_id, task_id).await?;
        let current: TaskStatus = existing
            .status
            .parse()
            .map_err(|_| AppError::validation("Task has an unknown stored status"))?;

        if !current.can_transition_to(next) {
            return Err(AppError::InvalidStateTransition(format!(
                "Cannot move task from {} to {}",
                current, next
            )));
        }

        let task = sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks SET status = $1 WHERE id = $2 RETURNING {TASK_COLUMNS}"
        ))
        .bind(next.to_string())
        .bind(task_id)
        .fetch_one(&self.db)
        .await?;

        Ok(task)
    }

    /// Delete a task
    pub async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks t
            USING areas a
            WHERE t.id = $1 AND a.id = t.area_id AND a.user_id = $2
            "#,
        )
        .bind(task_id)
        .bind(user_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Task".to_string()));
        }

        Ok(())
    }

    async fn get_task(&self, user_id: Uuid, task_id: Uuid) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT t.id, t.title, t.status, t.assignee, t.due_date, t.area_id, t.created_at
            FROM tasks t
            JOIN areas a ON a.id = t.area_id
            WHERE t.id = $1 AND a.user_id = $2
            "#,
        )
        .bind(task_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Task".to_string()))
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
