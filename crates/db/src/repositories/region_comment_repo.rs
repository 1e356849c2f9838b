//! Repository for the `region_comments` table.

use sqlx::PgPool;

use photomark_core::types::DbId;

use crate::models::comment::RegionComment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, region_id, photo_id, user_id, comment_text, deleted_at, created_at, updated_at";

/// Provides CRUD operations for region comments.
pub struct RegionCommentRepo;

impl RegionCommentRepo {
    /// Insert a new region comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        region_id: DbId,
        photo_id: DbId,
        user_id: DbId,
        comment_text: &str,
    ) -> Result<RegionComment, sqlx::Error> {
        let query = format!(
            "INSERT INTO region_comments (region_id, photo_id, user_id, comment_text)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RegionComment>(&query)
            .bind(region_id)
            .bind(photo_id)
            .bind(user_id)
            .bind(comment_text)
            .fetch_one(pool)
            .await
    }

    /// Find a region comment by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RegionComment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM region_comments WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, RegionComment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all comments on a region, oldest first. Excludes soft-deleted rows.
    pub async fn list_by_region(
        pool: &PgPool,
        region_id: DbId,
    ) -> Result<Vec<RegionComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM region_comments
             WHERE region_id = $1 AND deleted_at IS NULL
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, RegionComment>(&query)
            .bind(region_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a region comment's text.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        comment_text: &str,
    ) -> Result<Option<RegionComment>, sqlx::Error> {
        let query = format!(
            "UPDATE region_comments SET comment_text = $2, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RegionComment>(&query)
            .bind(id)
            .bind(comment_text)
            .fetch_optional(pool)
            .await
    }

    /// Delete a region comment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM region_comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
