//! Category entity models and DTOs.
//!
//! Covers two related tables:
//! - `photo_categories` -- name/value tags on a whole photo
//! - `region_categories` -- name/value tags on a specific region
//!
//! Category creation accepts a batch of name/value pairs and persists one
//! row per pair.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use photomark_core::annotation::CategoryPair;
use photomark_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// PhotoCategory
// ---------------------------------------------------------------------------

/// A row from the `photo_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoCategory {
    pub id: DbId,
    pub photo_id: DbId,
    pub user_id: DbId,
    pub category_name: String,
    pub category_text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating photo categories from a batch of name/value pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhotoCategories {
    pub user_id: DbId,
    pub pairs: Vec<CategoryPair>,
}

/// DTO for updating a photo category. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePhotoCategory {
    pub category_name: Option<String>,
    pub category_text: Option<String>,
}

// ---------------------------------------------------------------------------
// RegionCategory
// ---------------------------------------------------------------------------

/// A row from the `region_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RegionCategory {
    pub id: DbId,
    pub region_id: DbId,
    pub photo_id: DbId,
    pub user_id: DbId,
    pub category_name: String,
    pub category_text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating region categories from a batch of name/value pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegionCategories {
    pub user_id: DbId,
    pub pairs: Vec<CategoryPair>,
}

/// DTO for updating a region category. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRegionCategory {
    pub category_name: Option<String>,
    pub category_text: Option<String>,
}
