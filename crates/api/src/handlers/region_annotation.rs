//! Handlers for region-scoped comments and categories.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use photomark_core::annotation::{
    validate_category_name, validate_category_pairs, validate_comment_text,
};
use photomark_core::types::DbId;
use photomark_db::embedding::RegionEmbedding;
use photomark_db::models::category::{CreateRegionCategories, UpdateRegionCategory};
use photomark_db::models::comment::{CreateRegionComment, UpdateRegionComment};
use photomark_db::repositories::{RegionCategoryRepo, RegionCommentRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::region::ensure_region_in_photo;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Region comments
// ---------------------------------------------------------------------------

/// POST /photos/{photo_id}/regions/{region_id}/comments
///
/// Create a comment on a region. The region must belong to the photo named
/// in the path.
pub async fn create_region_comment(
    State(state): State<AppState>,
    Path((photo_id, region_id)): Path<(DbId, DbId)>,
    Json(input): Json<CreateRegionComment>,
) -> AppResult<impl IntoResponse> {
    ensure_region_in_photo(&state.pool, region_id, photo_id).await?;

    validate_comment_text(&input.comment_text).map_err(AppError::Core)?;

    let comment = RegionEmbedding::add_region_comment(
        &state.pool,
        region_id,
        photo_id,
        input.user_id,
        &input.comment_text,
    )
    .await?;

    tracing::info!(
        user_id = input.user_id,
        photo_id,
        region_id,
        comment_id = comment.id,
        "Region comment created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// GET /photos/{photo_id}/regions/{region_id}/comments
///
/// List the comments on a region.
pub async fn list_region_comments(
    State(state): State<AppState>,
    Path((_photo_id, region_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let comments = RegionCommentRepo::list_by_region(&state.pool, region_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// PUT /photos/{photo_id}/region-comments/{id}
///
/// Replace a region comment's text.
pub async fn update_region_comment(
    State(state): State<AppState>,
    Path((photo_id, comment_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateRegionComment>,
) -> AppResult<impl IntoResponse> {
    validate_comment_text(&input.comment_text).map_err(AppError::Core)?;

    let comment = RegionEmbedding::edit_region_comment(
        &state.pool,
        comment_id,
        photo_id,
        &input.comment_text,
    )
    .await?;

    tracing::info!(photo_id, comment_id, "Region comment updated");

    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /photos/{photo_id}/region-comments/{id}
///
/// Delete a region comment. Idempotent: an absent comment is success.
pub async fn delete_region_comment(
    State(state): State<AppState>,
    Path((photo_id, comment_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let deleted = RegionEmbedding::delete_region_comment(&state.pool, comment_id).await?;

    if deleted {
        tracing::info!(photo_id, comment_id, "Region comment deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Region categories
// ---------------------------------------------------------------------------

/// POST /photos/{photo_id}/regions/{region_id}/categories
///
/// Create one category row per submitted name/value pair, atomically.
pub async fn create_region_categories(
    State(state): State<AppState>,
    Path((photo_id, region_id)): Path<(DbId, DbId)>,
    Json(input): Json<CreateRegionCategories>,
) -> AppResult<impl IntoResponse> {
    ensure_region_in_photo(&state.pool, region_id, photo_id).await?;

    validate_category_pairs(&input.pairs).map_err(AppError::Core)?;

    let categories = RegionEmbedding::add_region_category(
        &state.pool,
        region_id,
        photo_id,
        input.user_id,
        &input.pairs,
    )
    .await?;

    tracing::info!(
        user_id = input.user_id,
        photo_id,
        region_id,
        count = categories.len(),
        "Region categories created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: categories }),
    ))
}

/// GET /photos/{photo_id}/regions/{region_id}/categories
///
/// List the categories on a region.
pub async fn list_region_categories(
    State(state): State<AppState>,
    Path((_photo_id, region_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let categories = RegionCategoryRepo::list_by_region(&state.pool, region_id).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// PUT /photos/{photo_id}/region-categories/{id}
///
/// Update a region category's name and/or value.
pub async fn update_region_category(
    State(state): State<AppState>,
    Path((photo_id, category_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateRegionCategory>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.category_name {
        validate_category_name(name).map_err(AppError::Core)?;
    }

    let category =
        RegionEmbedding::edit_region_category(&state.pool, category_id, photo_id, &input).await?;

    tracing::info!(photo_id, category_id, "Region category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /photos/{photo_id}/region-categories/{id}
///
/// Delete a region category. Idempotent: an absent category is success.
pub async fn delete_region_category(
    State(state): State<AppState>,
    Path((photo_id, category_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let deleted = RegionEmbedding::delete_region_category(&state.pool, category_id).await?;

    if deleted {
        tracing::info!(photo_id, category_id, "Region category deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
