//! Comment entity models and DTOs.
//!
//! Covers two related tables:
//! - `photo_comments` -- free-text comments on a whole photo
//! - `region_comments` -- free-text comments on a specific region

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use photomark_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// PhotoComment
// ---------------------------------------------------------------------------

/// A row from the `photo_comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoComment {
    pub id: DbId,
    pub photo_id: DbId,
    pub user_id: DbId,
    pub comment_text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a photo comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhotoComment {
    pub user_id: DbId,
    pub comment_text: String,
}

/// DTO for updating a photo comment.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePhotoComment {
    pub comment_text: String,
}

// ---------------------------------------------------------------------------
// RegionComment
// ---------------------------------------------------------------------------

/// A row from the `region_comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RegionComment {
    pub id: DbId,
    pub region_id: DbId,
    pub photo_id: DbId,
    pub user_id: DbId,
    pub comment_text: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a region comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegionComment {
    pub user_id: DbId,
    pub comment_text: String,
}

/// DTO for updating a region comment.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRegionComment {
    pub comment_text: String,
}
