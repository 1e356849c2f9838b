//! Region embedding service.
//!
//! Orchestrates creation, edit, and deletion of region-scoped annotations.
//! The two multi-step writes -- region+coordinate creation and category
//! batches -- each run inside one transaction.

use sqlx::PgPool;

use photomark_core::annotation::CategoryPair;
use photomark_core::types::DbId;

use crate::embedding::EmbedError;
use crate::models::category::{RegionCategory, UpdateRegionCategory};
use crate::models::comment::RegionComment;
use crate::models::region::{
    CreatePhotoRegion, PhotoRegion, RegionCoordinate, RegionWithCoordinate,
    UpdateRegionCoordinate,
};
use crate::repositories::{
    PhotoRegionRepo, RegionCategoryRepo, RegionCommentRepo, RegionCoordinateRepo,
};

const REGION_COLUMNS: &str =
    "id, photo_id, user_id, shape_id, region_name, deleted_at, created_at, updated_at";

const COORDINATE_COLUMNS: &str = "id, region_id, photo_id, user_id, region_x, region_y, \
    height, width, deleted_at, created_at, updated_at";

const CATEGORY_COLUMNS: &str =
    "id, region_id, photo_id, user_id, category_name, category_text, created_at, updated_at";

/// Orchestrates region-scoped annotation writes within one transaction each.
pub struct RegionEmbedding;

impl RegionEmbedding {
    /// Save a region marked on a photo, together with its coordinate.
    ///
    /// Both rows are inserted in one transaction: if the coordinate insert
    /// fails, the region insert is rolled back and no partial region
    /// survives.
    pub async fn add_photo_region(
        pool: &PgPool,
        photo_id: DbId,
        input: &CreatePhotoRegion,
    ) -> Result<RegionWithCoordinate, EmbedError> {
        let mut tx = pool.begin().await?;

        tracing::debug!(
            photo_id,
            user_id = input.user_id,
            shape_id = input.shape_id,
            "Saving photo region"
        );
        let region_query = format!(
            "INSERT INTO photo_regions (photo_id, user_id, shape_id, region_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {REGION_COLUMNS}"
        );
        let region = sqlx::query_as::<_, PhotoRegion>(&region_query)
            .bind(photo_id)
            .bind(input.user_id)
            .bind(input.shape_id)
            .bind(&input.region_name)
            .fetch_one(&mut *tx)
            .await?;

        tracing::debug!(
            region_id = region.id,
            region_x = input.region_x,
            region_y = input.region_y,
            height = input.height,
            width = input.width,
            "Saving region coordinate"
        );
        let coordinate_query = format!(
            "INSERT INTO region_coordinates
                (region_id, photo_id, user_id, region_x, region_y, height, width)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COORDINATE_COLUMNS}"
        );
        let coordinate = sqlx::query_as::<_, RegionCoordinate>(&coordinate_query)
            .bind(region.id)
            .bind(photo_id)
            .bind(input.user_id)
            .bind(input.region_x)
            .bind(input.region_y)
            .bind(input.height)
            .bind(input.width)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(RegionWithCoordinate { region, coordinate })
    }

    /// Save a comment on a region.
    ///
    /// No region pre-check is performed here; the handler layer verifies the
    /// region reference before calling.
    pub async fn add_region_comment(
        pool: &PgPool,
        region_id: DbId,
        photo_id: DbId,
        user_id: DbId,
        comment_text: &str,
    ) -> Result<RegionComment, EmbedError> {
        tracing::debug!(region_id, photo_id, user_id, "Saving region comment");
        let comment =
            RegionCommentRepo::create(pool, region_id, photo_id, user_id, comment_text).await?;
        Ok(comment)
    }

    /// Save a batch of category name/value pairs on a region, one row per
    /// pair, all inserted in one transaction.
    pub async fn add_region_category(
        pool: &PgPool,
        region_id: DbId,
        photo_id: DbId,
        user_id: DbId,
        pairs: &[CategoryPair],
    ) -> Result<Vec<RegionCategory>, EmbedError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO region_categories
                (region_id, photo_id, user_id, category_name, category_text)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {CATEGORY_COLUMNS}"
        );
        let mut created = Vec::with_capacity(pairs.len());
        for pair in pairs {
            tracing::debug!(
                region_id,
                photo_id,
                user_id,
                category_name = %pair.name,
                "Saving region category"
            );
            let category = sqlx::query_as::<_, RegionCategory>(&query)
                .bind(region_id)
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

    /// Replace the text of a region comment.
    ///
    /// Fails with [`EmbedError::NotFound`] if the comment does not exist and
    /// [`EmbedError::InvalidReference`] if it belongs to a different photo
    /// than claimed.
    pub async fn edit_region_comment(
        pool: &PgPool,
        comment_id: DbId,
        photo_id: DbId,
        comment_text: &str,
    ) -> Result<RegionComment, EmbedError> {
        let existing = RegionCommentRepo::find_by_id(pool, comment_id)
            .await?
            .ok_or(EmbedError::NotFound {
                entity: "RegionComment",
                id: comment_id,
            })?;
        if existing.photo_id != photo_id {
            return Err(EmbedError::InvalidReference {
                entity: "RegionComment",
                id: comment_id,
                photo_id,
            });
        }

        tracing::debug!(comment_id, "Updating region comment");
        RegionCommentRepo::update(pool, comment_id, comment_text)
            .await?
            .ok_or(EmbedError::NotFound {
                entity: "RegionComment",
                id: comment_id,
            })
    }

    /// Update a region category's name and/or value, under the same
    /// reference checks as [`Self::edit_region_comment`].
    pub async fn edit_region_category(
        pool: &PgPool,
        category_id: DbId,
        photo_id: DbId,
        input: &UpdateRegionCategory,
    ) -> Result<RegionCategory, EmbedError> {
        let existing = RegionCategoryRepo::find_by_id(pool, category_id)
            .await?
            .ok_or(EmbedError::NotFound {
                entity: "RegionCategory",
                id: category_id,
            })?;
        if existing.photo_id != photo_id {
            return Err(EmbedError::InvalidReference {
                entity: "RegionCategory",
                id: category_id,
                photo_id,
            });
        }

        tracing::debug!(category_id, "Updating region category");
        RegionCategoryRepo::update(pool, category_id, input)
            .await?
            .ok_or(EmbedError::NotFound {
                entity: "RegionCategory",
                id: category_id,
            })
    }

    /// Update a region coordinate's geometry, under the same reference
    /// checks as [`Self::edit_region_comment`].
    pub async fn edit_region_coordinate(
        pool: &PgPool,
        coordinate_id: DbId,
        photo_id: DbId,
        input: &UpdateRegionCoordinate,
    ) -> Result<RegionCoordinate, EmbedError> {
        let existing = RegionCoordinateRepo::find_by_id(pool, coordinate_id)
            .await?
            .ok_or(EmbedError::NotFound {
                entity: "RegionCoordinate",
                id: coordinate_id,
            })?;
        if existing.photo_id != photo_id {
            return Err(EmbedError::InvalidReference {
                entity: "RegionCoordinate",
                id: coordinate_id,
                photo_id,
            });
        }

        tracing::debug!(coordinate_id, "Updating region coordinate");
        RegionCoordinateRepo::update(pool, coordinate_id, input)
            .await?
            .ok_or(EmbedError::NotFound {
                entity: "RegionCoordinate",
                id: coordinate_id,
            })
    }

    /// Delete a photo region. Idempotent: an absent id is success.
    ///
    /// Removes exactly the region row. Returns `true` if a row was removed,
    /// `false` if there was nothing to delete.
    pub async fn delete_photo_region(pool: &PgPool, region_id: DbId) -> Result<bool, EmbedError> {
        let deleted = PhotoRegionRepo::delete(pool, region_id).await?;
        if !deleted {
            tracing::debug!(region_id, "Photo region does not exist, nothing to delete");
        }
        Ok(deleted)
    }

    /// Delete a region comment. Idempotent: an absent id is success.
    pub async fn delete_region_comment(
        pool: &PgPool,
        comment_id: DbId,
    ) -> Result<bool, EmbedError> {
        let deleted = RegionCommentRepo::delete(pool, comment_id).await?;
        if !deleted {
            tracing::debug!(comment_id, "Region comment does not exist, nothing to delete");
        }
        Ok(deleted)
    }

    /// Delete a region category. Idempotent: an absent id is success.
    pub async fn delete_region_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<bool, EmbedError> {
        let deleted = RegionCategoryRepo::delete(pool, category_id).await?;
        if !deleted {
            tracing::debug!(
                category_id,
                "Region category does not exist, nothing to delete"
            );
        }
        Ok(deleted)
    }

    /// Delete a region coordinate. Idempotent: an absent id is success.
    pub async fn delete_region_coordinate(
        pool: &PgPool,
        coordinate_id: DbId,
    ) -> Result<bool, EmbedError> {
        let deleted = RegionCoordinateRepo::delete(pool, coordinate_id).await?;
        if !deleted {
            tracing::debug!(
                coordinate_id,
                "Region coordinate does not exist, nothing to delete"
            );
        }
        Ok(deleted)
    }
}
