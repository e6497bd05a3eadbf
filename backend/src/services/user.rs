//! User profile service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use shared::validation::validate_email;

use crate::error::{AppError, AppResult};

/// User profile service
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

/// A user profile. The password hash never leaves the auth service.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for a partial profile update
#[derive(Debug, Deserialize)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

const USER_COLUMNS: &str = "id, name, email, role, avatar, bio, created_at";

impl UserService {
    /// Create a new UserService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get a user profile by id
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<User> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))
    }

    /// Partially update a user profile
    pub async fn update_user(&self, user_id: Uuid, input: UpdateUserInput) -> AppResult<User> {
        let existing = self.get_user(user_id).await?;

        if let Some(ref email) = input.email {
            validate_email(email).map_err(|msg| AppError::invalid_field("email", msg))?;

            let duplicate = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM users WHERE email = $1 AND id != $2",
            )
            .bind(email)
            .bind(user_id)
            .fetch_one(&self.db)
            .await?;

            if duplicate > 0 {
                return Err(AppError::DuplicateEntry("email".to_string()));
            }
        }

        let name = input.name.unwrap_or(existing.name);
        let email = input.email.unwrap_or(existing.email);
        let role = input.role.unwrap_or(existing.role);
        let avatar = input.avatar.or(existing.avatar);
        let bio = input.bio.or(existing.bio);

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET name = $1, email = $2, role = $3, avatar = $4, bio = $5
            WHERE id = $6
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&name)
        .bind(&email)
        .bind(&role)
        .bind(&avatar)
        .bind(&bio)
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(user)
    }
}
