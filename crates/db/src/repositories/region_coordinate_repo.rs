//! Repository for the `region_coordinates` table.
//!
//! Coordinate creation happens inside
//! [`crate::embedding::RegionEmbedding::add_photo_region`], in the same
//! transaction as the region insert.

use sqlx::PgPool;

use photomark_core::types::DbId;

use crate::models::region::{RegionCoordinate, UpdateRegionCoordinate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, region_id, photo_id, user_id, region_x, region_y, \
    height, width, deleted_at, created_at, updated_at";

/// Provides lookup, update, and delete operations for region coordinates.
pub struct RegionCoordinateRepo;

impl RegionCoordinateRepo {
    /// Find a coordinate by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RegionCoordinate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM region_coordinates WHERE id = $1 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, RegionCoordinate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the coordinate belonging to a region. Excludes soft-deleted rows.
    pub async fn find_by_region(
        pool: &PgPool,
        region_id: DbId,
    ) -> Result<Option<RegionCoordinate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM region_coordinates
             WHERE region_id = $1 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, RegionCoordinate>(&query)
            .bind(region_id)
            .fetch_optional(pool)
            .await
    }

    /// List all coordinates on a photo, oldest first. Excludes soft-deleted rows.
    pub async fn list_by_photo(
        pool: &PgPool,
        photo_id: DbId,
    ) -> Result<Vec<RegionCoordinate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM region_coordinates
             WHERE photo_id = $1 AND deleted_at IS NULL
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, RegionCoordinate>(&query)
            .bind(photo_id)
            .fetch_all(pool)
            .await
    }

    /// Update a coordinate's geometry. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRegionCoordinate,
    ) -> Result<Option<RegionCoordinate>, sqlx::Error> {
        let query = format!(
            "UPDATE region_coordinates SET
                region_x = COALESCE($2, region_x),
                region_y = COALESCE($3, region_y),
                height = COALESCE($4, height),
                width = COALESCE($5, width),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RegionCoordinate>(&query)
            .bind(id)
            .bind(input.region_x)
            .bind(input.region_y)
            .bind(input.height)
            .bind(input.width)
            .fetch_optional(pool)
            .await
    }

    /// Delete a coordinate by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM region_coordinates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
