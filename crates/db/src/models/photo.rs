//! Photo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use photomark_core::types::{DbId, Timestamp};

/// A row from the `photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub user_id: DbId,
    pub file_path: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a newly uploaded photo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhoto {
    pub user_id: DbId,
    pub file_path: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating photo metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePhoto {
    pub title: Option<String>,
    pub description: Option<String>,
}
