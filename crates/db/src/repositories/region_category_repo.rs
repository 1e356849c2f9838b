//! Repository for the `region_categories` table.
//!
//! Category creation is batch-oriented and atomic, so inserts go through
//! [`crate::embedding::RegionEmbedding::add_region_category`].

use sqlx::PgPool;

use photomark_core::types::DbId;

use crate::models::category::{RegionCategory, UpdateRegionCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, region_id, photo_id, user_id, category_name, category_text, created_at, updated_at";

/// Provides lookup, update, and delete operations for region categories.
pub struct RegionCategoryRepo;

impl RegionCategoryRepo {
    /// Find a region category by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RegionCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM region_categories WHERE id = $1");
        sqlx::query_as::<_, RegionCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories on a region, oldest first.
    pub async fn list_by_region(
        pool: &PgPool,
        region_id: DbId,
    ) -> Result<Vec<RegionCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM region_categories
             WHERE region_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, RegionCategory>(&query)
            .bind(region_id)
            .fetch_all(pool)
            .await
    }

    /// Update a region category. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRegionCategory,
    ) -> Result<Option<RegionCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE region_categories SET
                category_name = COALESCE($2, category_name),
                category_text = COALESCE($3, category_text),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RegionCategory>(&query)
            .bind(id)
            .bind(&input.category_name)
            .bind(&input.category_text)
            .fetch_optional(pool)
            .await
    }

    /// Delete a region category by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM region_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
