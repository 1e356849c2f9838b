//! Region entity models and DTOs.
//!
//! Covers two related tables:
//! - `photo_regions` -- user-drawn rectangular areas on a photo
//! - `region_coordinates` -- the geometry of a region (one per region at creation)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use photomark_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// PhotoRegion
// ---------------------------------------------------------------------------

/// A row from the `photo_regions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoRegion {
    pub id: DbId,
    pub photo_id: DbId,
    pub user_id: DbId,
    pub shape_id: i32,
    pub region_name: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a region together with its coordinate.
///
/// A region is never persisted without its coordinate, so the create DTO
/// carries the full geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhotoRegion {
    pub user_id: DbId,
    pub shape_id: i32,
    pub region_name: Option<String>,
    pub region_x: i32,
    pub region_y: i32,
    pub height: i32,
    pub width: i32,
}

// ---------------------------------------------------------------------------
// RegionCoordinate
// ---------------------------------------------------------------------------

/// A row from the `region_coordinates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RegionCoordinate {
    pub id: DbId,
    pub region_id: DbId,
    pub photo_id: DbId,
    pub user_id: DbId,
    pub region_x: i32,
    pub region_y: i32,
    pub height: i32,
    pub width: i32,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating a region coordinate. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRegionCoordinate {
    pub region_x: Option<i32>,
    pub region_y: Option<i32>,
    pub height: Option<i32>,
    pub width: Option<i32>,
}

// ---------------------------------------------------------------------------
// Composite
// ---------------------------------------------------------------------------

/// A region together with its coordinate, as returned by region creation
/// and listing.
#[derive(Debug, Clone, Serialize)]
pub struct RegionWithCoordinate {
    pub region: PhotoRegion,
    pub coordinate: RegionCoordinate,
}

/// A region listing entry. The coordinate is optional because coordinates
/// are independently deletable after region creation.
#[derive(Debug, Clone, Serialize)]
pub struct RegionListing {
    pub region: PhotoRegion,
    pub coordinate: Option<RegionCoordinate>,
}
