//! Repository for the `photo_comments` table.

use sqlx::PgPool;

use photomark_core::types::DbId;

use crate::models::comment::PhotoComment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, photo_id, user_id, comment_text, created_at, updated_at";

/// Provides CRUD operations for photo comments.
pub struct PhotoCommentRepo;

impl PhotoCommentRepo {
    /// Insert a new photo comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        photo_id: DbId,
        user_id: DbId,
        comment_text: &str,
    ) -> Result<PhotoComment, sqlx::Error> {
        let query = format!(
            "INSERT INTO photo_comments (photo_id, user_id, comment_text)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoComment>(&query)
            .bind(photo_id)
            .bind(user_id)
            .bind(comment_text)
            .fetch_one(pool)
            .await
    }

    /// Find a photo comment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PhotoComment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photo_comments WHERE id = $1");
        sqlx::query_as::<_, PhotoComment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all comments on a photo, oldest first.
    pub async fn list_by_photo(
        pool: &PgPool,
        photo_id: DbId,
    ) -> Result<Vec<PhotoComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photo_comments
             WHERE photo_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, PhotoComment>(&query)
            .bind(photo_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a photo comment's text.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        comment_text: &str,
    ) -> Result<Option<PhotoComment>, sqlx::Error> {
        let query = format!(
            "UPDATE photo_comments SET comment_text = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoComment>(&query)
            .bind(id)
            .bind(comment_text)
            .fetch_optional(pool)
            .await
    }

    /// Delete a photo comment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photo_comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
