//! Area service for managing map areas
//!
//! An area is a user-defined quadrilateral region of farmland with crop
//! metadata. Its polygon is stored as a JSONB array of percentage-space
//! points, in click order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use shared::geometry::Point;
use shared::validation::{
    validate_area_name, validate_hectares, validate_hex_color, validate_polygon,
};

use crate::error::{AppError, AppResult};

/// Area service for polygon CRUD scoped to the owning user
#[derive(Clone)]
pub struct AreaService {
    db: PgPool,
}

/// A persisted area
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub hectares: f64,
    pub crop_type: String,
    pub color: String,
    pub points: Json<Vec<Point>>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an area
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAreaInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub hectares: Option<f64>,
    pub crop_type: Option<String>,
    pub color: Option<String>,
    pub points: Option<Vec<Point>>,
}

/// Input for a partial area update
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAreaInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub hectares: Option<f64>,
    pub crop_type: Option<String>,
    pub color: Option<String>,
    pub points: Option<Vec<Point>>,
}

const AREA_COLUMNS: &str =
    "id, name, description, hectares, crop_type, color, points, user_id, created_at";

impl AreaService {
    /// Create a new AreaService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all areas owned by a user
    pub async fn get_areas(&self, user_id: Uuid) -> AppResult<Vec<Area>> {
        let areas = sqlx::query_as::<_, Area>(&format!(
            "SELECT {AREA_COLUMNS} FROM areas WHERE user_id = $1 ORDER BY created_at"
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(areas)
    }

    /// Get a single area by id
    pub async fn get_area(&self, user_id: Uuid, area_id: Uuid) -> AppResult<Area> {
        sqlx::query_as::<_, Area>(&format!(
            "SELECT {AREA_COLUMNS} FROM areas WHERE id = $1 AND user_id = $2"
        ))
        .bind(area_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Area".to_string()))
    }

    /// Create an area from a confirmed polygon draft
    pub async fn create_area(&self, user_id: Uuid, input: CreateAreaInput) -> AppResult<Area> {
        let name = input
            .name
            .ok_or_else(|| AppError::invalid_field("name", "Area name is required"))?;
        validate_area_name(&name).map_err(|msg| AppError::invalid_field("name", msg))?;

        let points = input
            .points
            .ok_or_else(|| AppError::invalid_field("points", "Area points are required"))?;
        validate_polygon(&points).map_err(|msg| AppError::invalid_field("points", msg))?;

        let hectares = input.hectares.unwrap_or(0.0);
        validate_hectares(hectares).map_err(|msg| AppError::invalid_field("hectares", msg))?;

        let color = input.color.unwrap_or_else(|| "#3b82f6".to_string());
        validate_hex_color(&color).map_err(|msg| AppError::invalid_field("color", msg))?;

        let description = input.description.unwrap_or_default();
        let crop_type = input.crop_type.unwrap_or_else(|| "Unassigned".to_string());

        let area = sqlx::query_as::<_, Area>(&format!(
            r#"
            INSERT INTO areas (name, description, hectares, crop_type, color, points, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {AREA_COLUMNS}
            "#
        ))
        .bind(&name)
        .bind(&description)
        .bind(hectares)
        .bind(&crop_type)
        .bind(&color)
        .bind(Json(&points))
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(area)
    }

    /// Partially update an area. Last write wins; there is no optimistic
    /// locking at this layer.
    pub async fn update_area(
        &self,
        user_id: Uuid,
        area_id: Uuid,
        input: UpdateAreaInput,
    ) -> AppResult<Area> {
        let existing = self.get_area(user_id, area_id).await?;

        if let Some(ref name) = input.name {
            validate_area_name(name).map_err(|msg| AppError::invalid_field("name", msg))?;
        }
        if let Some(ref points) = input.points {
            validate_polygon(points).map_err(|msg| AppError::invalid_field("points", msg))?;
        }
        if let Some(hectares) = input.hectares {
            validate_hectares(hectares)
                .map_err(|msg| AppError::invalid_field("hectares", msg))?;
        }
        if let Some(ref color) = input.color {
            validate_hex_color(color).map_err(|msg| AppError::invalid_field("color", msg))?;
        }

        let name = input.name.unwrap_or(existing.name);
        let description = input.description.unwrap_or(existing.description);
        let hectares = input.hectares.unwrap_or(existing.hectares);
        let crop_type = input.crop_type.unwrap_or(existing.crop_type);
        let color = input.color.unwrap_or(existing.color);
        let points = input.points.map(Json).unwrap_or(existing.points);

        let area = sqlx::query_as::<_, Area>(&format!(
            r#"
            UPDATE areas
            SET name = $1, description = $2, hectares = $3, crop_type = $4,
                color = $5, points = $6
            WHERE id = $7
            RETURNING {AREA_COLUMNS}
            "#
        ))
        .bind(&name)
        .bind(&description)
        .bind(hectares)
        .bind(&crop_type)
        .bind(&color)
        .bind(&points)
        .bind(area_id)
        .fetch_one(&self.db)
        .await?;

        Ok(area)
    }

    /// Delete an area. Child tasks and notes are removed by the cascade
    /// on the foreign keys.
    pub async fn delete_area(&self, user_id: Uuid, area_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM areas WHERE id = $1 AND user_id = $2")
            .bind(area_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Area".to_string()));
        }

        Ok(())
    }

    /// Check that an area exists and belongs to the user. Used by the
    /// task and note services before touching child rows.
    pub async fn assert_owned(&self, user_id: Uuid, area_id: Uuid) -> AppResult<()> {
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

    // A lazy pool never opens a connection until a query runs, so these
    // tests prove that input rejection happens before any database work.
    fn service() -> AreaService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/farmarea_unit")
            .unwrap();
        AreaService::new(pool)
    }

    fn square_points() -> Vec<Point> {
        vec![
            Point { x: 10.0, y: 10.0 },
            Point { x: 40.0, y: 10.0 },
            Point { x: 40.0, y: 40.0 },
            Point { x: 10.0, y: 40.0 },
        ]
    }

    fn input(name: Option<&str>, points: Option<Vec<Point>>) -> CreateAreaInput {
        CreateAreaInput {
            name: name.map(str::to_string),
            description: None,
            hectares: None,
            crop_type: None,
            color: None,
            points,
        }
    }

    #[tokio::test]
    async fn create_without_points_is_rejected_before_any_query() {
        let err = service()
            .create_area(Uuid::new_v4(), input(Some("North Field"), None))
            .await
            .unwrap_err();

        assert!(
            matches!(err, AppError::Validation { field: Some(ref f), .. } if f == "points")
        );
    }

    #[tokio::test]
    async fn create_without_name_is_rejected_before_any_query() {
        let err = service()
            .create_area(Uuid::new_v4(), input(None, Some(square_points())))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { field: Some(ref f), .. } if f == "name"));
    }

    #[tokio::test]
    async fn create_with_truncated_polygon_is_rejected() {
        let mut points = square_points();
        points.pop();

        let err = service()
            .create_area(Uuid::new_v4(), input(Some("North Field"), Some(points)))
            .await
            .unwrap_err();

        assert!(
            matches!(err, AppError::Validation { field: Some(ref f), .. } if f == "points")
        );
    }

    #[tokio::test]
    async fn create_with_malformed_color_is_rejected() {
        let mut bad = input(Some("North Field"), Some(square_points()));
        bad.color = Some("blue".to_string());

        let err = service().create_area(Uuid::new_v4(), bad).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { field: Some(ref f), .. } if f == "color"));
    }
}
