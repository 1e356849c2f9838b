//! Repository for the `photo_regions` table.
//!
//! Region creation is not exposed here: a region must never be persisted
//! without its coordinate, so inserts go through
//! [`crate::embedding::RegionEmbedding::add_photo_region`] which writes both
//! rows in one transaction.

use sqlx::PgPool;

use photomark_core::types::DbId;

use crate::models::region::PhotoRegion;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, photo_id, user_id, shape_id, region_name, deleted_at, created_at, updated_at";

/// Provides lookup and delete operations for photo regions.
pub struct PhotoRegionRepo;

impl PhotoRegionRepo {
    /// Find a region by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PhotoRegion>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM photo_regions WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, PhotoRegion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all regions on a photo, oldest first. Excludes soft-deleted rows.
    pub async fn list_by_photo(
        pool: &PgPool,
        photo_id: DbId,
    ) -> Result<Vec<PhotoRegion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photo_regions
             WHERE photo_id = $1 AND deleted_at IS NULL
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, PhotoRegion>(&query)
            .bind(photo_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a region by ID. Returns `true` if a row was removed.
    ///
    /// Removes exactly the region row; dependent coordinates, comments, and
    /// categories are deleted independently by their own operations.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photo_regions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
