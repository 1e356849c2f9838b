//! Photo embedding service.
//!
//! Mirrors the region embedding service for whole-photo comments and
//! categories. Callers verify the photo exists before invoking the add
//! operations.

use sqlx::PgPool;

use photomark_core::annotation::CategoryPair;
use photomark_core::types::DbId;

use crate::embedding::EmbedError;
use crate::models::category::{PhotoCategory, UpdatePhotoCategory};
use crate::models::comment::PhotoComment;
use crate::repositories::{PhotoCategoryRepo, PhotoCommentRepo};

const CATEGORY_COLUMNS: &str =
    "id, photo_id, user_id, category_name, category_text, created_at, updated_at";

/// Orchestrates whole-photo annotation writes within one transaction each.
pub struct PhotoEmbedding;

impl PhotoEmbedding {
    /// Save a comment on a photo.
    pub async fn add_photo_comment(
        pool: &PgPool,
        photo_id: DbId,
        user_id: DbId,
        comment_text: &str,
    ) -> Result<PhotoComment, EmbedError> {
        tracing::debug!(photo_id, user_id, "Saving photo comment");
        let comment = PhotoCommentRepo::create(pool, photo_id, user_id, comment_text).await?;
        Ok(comment)
    }

    /// Save a batch of category name/value pairs on a photo, one row per
    /// pair, all inserted in one transaction.
    pub async fn add_photo_category(
        pool: &PgPool,
        photo_id: DbId,
        user_id: DbId,
        pairs: &[CategoryPair],
    ) -> Result<Vec<PhotoCategory>, EmbedError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO photo_categories (photo_id, user_id, category_name, category_text)
             VALUES ($1, $2, $3, $4)
             RETURNING {CATEGORY_COLUMNS}"
        );
        let mut created = Vec::with_capacity(pairs.len());
        for pair in pairs {
            tracing::debug!(
                photo_id,
                user_id,
                category_name = %pair.name,
                "Saving photo category"
            );
            let category = sqlx::query_as::<_, PhotoCategory>(&query)
                .bind(photo_id)
                .bind(user_id)
                .bind(&pair.name)
                .bind(&pair.value)
                .fetch_one(&mut *tx)
                .await?;
            created.push(category);
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Replace the text of a photo comment.
    ///
    /// Fails with [`EmbedError::NotFound`] if the comment does not exist and
    /// [`EmbedError::InvalidReference`] if it belongs to a different photo
    /// than claimed.
    pub async fn edit_photo_comment(
        pool: &PgPool,
        comment_id: DbId,
        photo_id: DbId,
        comment_text: &str,
    ) -> Result<PhotoComment, EmbedError> {
        let existing = PhotoCommentRepo::find_by_id(pool, comment_id)
            .await?
            .ok_or(EmbedError::NotFound {
                entity: "PhotoComment",
                id: comment_id,
            })?;
        if existing.photo_id != photo_id {
            return Err(EmbedError::InvalidReference {
                entity: "PhotoComment",
                id: comment_id,
                photo_id,
            });
        }

        tracing::debug!(comment_id, "Updating photo comment");
        PhotoCommentRepo::update(pool, comment_id, comment_text)
            .await?
            .ok_or(EmbedError::NotFound {
                entity: "PhotoComment",
                id: comment_id,
            })
    }

    /// Update a photo category's name and/or value, under the same
    /// reference checks as [`Self::edit_photo_comment`].
    pub async fn edit_photo_category(
        pool: &PgPool,
        category_id: DbId,
        photo_id: DbId,
        input: &UpdatePhotoCategory,
    ) -> Result<PhotoCategory, EmbedError> {
        let existing = PhotoCategoryRepo::find_by_id(pool, category_id)
            .await?
            .ok_or(EmbedError::NotFound {
                entity: "PhotoCategory",
                id: category_id,
            })?;
        if existing.photo_id != photo_id {
            return Err(EmbedError::InvalidReference {
                entity: "PhotoCategory",
                id: category_id,
                photo_id,
            });
        }

        tracing::debug!(category_id, "Updating photo category");
        PhotoCategoryRepo::update(pool, category_id, input)
            .await?
            .ok_or(EmbedError::NotFound {
                entity: "PhotoCategory",
                id: category_id,
            })
    }

    /// Delete a photo comment. Idempotent: an absent id is success.
    pub async fn delete_photo_comment(
        pool: &PgPool,
        comment_id: DbId,
    ) -> Result<bool, EmbedError> {
        let deleted = PhotoCommentRepo::delete(pool, comment_id).await?;
        if !deleted {
            tracing::debug!(comment_id, "Photo comment does not exist, nothing to delete");
        }
        Ok(deleted)
    }

    /// Delete a photo category. Idempotent: an absent id is success.
    pub async fn delete_photo_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<bool, EmbedError> {
        let deleted = PhotoCategoryRepo::delete(pool, category_id).await?;
        if !deleted {
            tracing::debug!(
                category_id,
                "Photo category does not exist, nothing to delete"
            );
        }
        Ok(deleted)
    }
}
