//! Farm settings service
//!
//! One display-name record per user. A user without a stored record sees
//! the default farm name.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;

/// Default farm display name when no record exists yet
pub const DEFAULT_FARM_NAME: &str = "FarmArea";

/// Farm settings service
#[derive(Clone)]
pub struct FarmSettingsService {
    db: PgPool,
}

/// Per-user farm display settings
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FarmSettings {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
}

/// Input for updating farm settings
#[derive(Debug, Deserialize)]
pub struct UpdateFarmSettingsInput {
    pub name: String,
}

impl FarmSettingsService {
    /// Create a new FarmSettingsService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get the farm settings for a user, if a record exists
    pub async fn get_settings(&self, user_id: Uuid) -> AppResult<Option<FarmSettings>> {
        let settings = sqlx::query_as::<_, FarmSettings>(
            "SELECT id, name, user_id FROM farm_settings WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(settings)
    }

    /// Update the farm name, creating the record if it does not exist
    pub async fn update_settings(
        &self,
        user_id: Uuid,
        input: UpdateFarmSettingsInput,
    ) -> AppResult<FarmSettings> {
        let settings = sqlx::query_as::<_, FarmSettings>(
            r#"
            INSERT INTO farm_settings (name, user_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, user_id
            "#,
        )
        .bind(&input.name)
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(settings)
    }
}
