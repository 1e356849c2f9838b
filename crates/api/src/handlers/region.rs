//! Handlers for photo regions and their coordinates.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgPool;

use photomark_core::annotation::validate_region_geometry;
use photomark_core::types::DbId;
use photomark_db::embedding::{EmbedError, RegionEmbedding};
use photomark_db::models::region::{CreatePhotoRegion, RegionListing, UpdateRegionCoordinate};
use photomark_db::repositories::{PhotoRegionRepo, RegionCoordinateRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::photo::ensure_photo_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify a region exists and belongs to the claimed photo.
///
/// Shared pre-check for region-scoped annotation creation: an absent region
/// is 404, a region on a different photo is an invalid reference.
pub async fn ensure_region_in_photo(
    pool: &PgPool,
    region_id: DbId,
    photo_id: DbId,
) -> AppResult<()> {
    let region = PhotoRegionRepo::find_by_id(pool, region_id)
        .await?
        .ok_or(AppError::Embed(EmbedError::NotFound {
            entity: "PhotoRegion",
            id: region_id,
        }))?;
    if region.photo_id != photo_id {
        return Err(AppError::Embed(EmbedError::InvalidReference {
            entity: "PhotoRegion",
            id: region_id,
            photo_id,
        }));
    }
    Ok(())
}

/// POST /photos/{photo_id}/regions
///
/// Create a region and its coordinate in one atomic operation.
pub async fn create_region(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
    Json(input): Json<CreatePhotoRegion>,
) -> AppResult<impl IntoResponse> {
    ensure_photo_exists(&state.pool, photo_id).await?;

    validate_region_geometry(input.region_x, input.region_y, input.height, input.width)
        .map_err(AppError::Core)?;

    let created = RegionEmbedding::add_photo_region(&state.pool, photo_id, &input).await?;

    tracing::info!(
        user_id = input.user_id,
        photo_id,
        region_id = created.region.id,
        "Photo region created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /photos/{photo_id}/regions
///
/// List the regions on a photo, each paired with its coordinate. The
/// coordinate can be absent when it was deleted on its own.
pub async fn list_regions(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let regions = PhotoRegionRepo::list_by_photo(&state.pool, photo_id).await?;
    let coordinates = RegionCoordinateRepo::list_by_photo(&state.pool, photo_id).await?;

    let mut by_region: HashMap<DbId, _> = coordinates
        .into_iter()
        .map(|c| (c.region_id, c))
        .collect();
    let listing: Vec<RegionListing> = regions
        .into_iter()
        .map(|region| {
            let coordinate = by_region.remove(&region.id);
            RegionListing { region, coordinate }
        })
        .collect();

    Ok(Json(DataResponse { data: listing }))
}

/// DELETE /photos/{photo_id}/regions/{region_id}
///
/// Delete a region. Idempotent: deleting an absent region is success.
pub async fn delete_region(
    State(state): State<AppState>,
    Path((photo_id, region_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let deleted = RegionEmbedding::delete_photo_region(&state.pool, region_id).await?;

    if deleted {
        tracing::info!(photo_id, region_id, "Photo region deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /photos/{photo_id}/coordinates
///
/// List the region coordinates on a photo.
pub async fn list_coordinates(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let coordinates = RegionCoordinateRepo::list_by_photo(&state.pool, photo_id).await?;
    Ok(Json(DataResponse { data: coordinates }))
}

/// PUT /photos/{photo_id}/coordinates/{id}
///
/// Update a coordinate's geometry. The coordinate must belong to the photo
/// named in the path.
pub async fn update_coordinate(
    State(state): State<AppState>,
    Path((photo_id, coordinate_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateRegionCoordinate>,
) -> AppResult<impl IntoResponse> {
    // Validate whichever geometry fields were provided; absent fields get
    // neutral stand-ins.
    validate_region_geometry(
        input.region_x.unwrap_or(0),
        input.region_y.unwrap_or(0),
        input.height.unwrap_or(1),
        input.width.unwrap_or(1),
    )
    .map_err(AppError::Core)?;

    let coordinate =
        RegionEmbedding::edit_region_coordinate(&state.pool, coordinate_id, photo_id, &input)
            .await?;

    tracing::info!(photo_id, coordinate_id, "Region coordinate updated");

    Ok(Json(DataResponse { data: coordinate }))
}

/// DELETE /photos/{photo_id}/coordinates/{id}
///
/// Delete a coordinate. Idempotent: deleting an absent coordinate is success.
pub async fn delete_coordinate(
    State(state): State<AppState>,
    Path((photo_id, coordinate_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let deleted = RegionEmbedding::delete_region_coordinate(&state.pool, coordinate_id).await?;

    if deleted {
        tracing::info!(photo_id, coordinate_id, "Region coordinate deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
