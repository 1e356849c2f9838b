//! Handlers for whole-photo comments and categories.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use photomark_core::annotation::{
    validate_category_name, validate_category_pairs, validate_comment_text,
};
use photomark_core::types::DbId;
use photomark_db::embedding::PhotoEmbedding;
use photomark_db::models::category::{CreatePhotoCategories, UpdatePhotoCategory};
use photomark_db::models::comment::{CreatePhotoComment, UpdatePhotoComment};
use photomark_db::repositories::{PhotoCategoryRepo, PhotoCommentRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::photo::ensure_photo_exists;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Photo comments
// ---------------------------------------------------------------------------

/// POST /photos/{photo_id}/comments
///
/// Create a comment on a photo. The photo must exist.
pub async fn create_photo_comment(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
    Json(input): Json<CreatePhotoComment>,
) -> AppResult<impl IntoResponse> {
    ensure_photo_exists(&state.pool, photo_id).await?;

    validate_comment_text(&input.comment_text).map_err(AppError::Core)?;

    let comment = PhotoEmbedding::add_photo_comment(
        &state.pool,
        photo_id,
        input.user_id,
        &input.comment_text,
    )
    .await?;

    tracing::info!(
        user_id = input.user_id,
        photo_id,
        comment_id = comment.id,
        "Photo comment created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// GET /photos/{photo_id}/comments
///
/// List the comments on a photo.
pub async fn list_photo_comments(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comments = PhotoCommentRepo::list_by_photo(&state.pool, photo_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// PUT /photos/{photo_id}/comments/{id}
///
/// Replace a photo comment's text.
pub async fn update_photo_comment(
    State(state): State<AppState>,
    Path((photo_id, comment_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdatePhotoComment>,
) -> AppResult<impl IntoResponse> {
    validate_comment_text(&input.comment_text).map_err(AppError::Core)?;

    let comment =
        PhotoEmbedding::edit_photo_comment(&state.pool, comment_id, photo_id, &input.comment_text)
            .await?;

    tracing::info!(photo_id, comment_id, "Photo comment updated");

    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /photos/{photo_id}/comments/{id}
///
/// Delete a photo comment. Idempotent: an absent comment is success.
pub async fn delete_photo_comment(
    State(state): State<AppState>,
    Path((photo_id, comment_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let deleted = PhotoEmbedding::delete_photo_comment(&state.pool, comment_id).await?;

    if deleted {
        tracing::info!(photo_id, comment_id, "Photo comment deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Photo categories
// ---------------------------------------------------------------------------

/// POST /photos/{photo_id}/categories
///
/// Create one category row per submitted name/value pair, atomically.
pub async fn create_photo_categories(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
    Json(input): Json<CreatePhotoCategories>,
) -> AppResult<impl IntoResponse> {
    ensure_photo_exists(&state.pool, photo_id).await?;

    validate_category_pairs(&input.pairs).map_err(AppError::Core)?;

    let categories =
        PhotoEmbedding::add_photo_category(&state.pool, photo_id, input.user_id, &input.pairs)
            .await?;

    tracing::info!(
        user_id = input.user_id,
        photo_id,
        count = categories.len(),
        "Photo categories created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: categories }),
    ))
}

/// GET /photos/{photo_id}/categories
///
/// List the categories on a photo.
pub async fn list_photo_categories(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let categories = PhotoCategoryRepo::list_by_photo(&state.pool, photo_id).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// PUT /photos/{photo_id}/categories/{id}
///
/// Update a photo category's name and/or value.
pub async fn update_photo_category(
    State(state): State<AppState>,
    Path((photo_id, category_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdatePhotoCategory>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.category_name {
        validate_category_name(name).map_err(AppError::Core)?;
    }

    let category =
        PhotoEmbedding::edit_photo_category(&state.pool, category_id, photo_id, &input).await?;

    tracing::info!(photo_id, category_id, "Photo category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /photos/{photo_id}/categories/{id}
///
/// Delete a photo category. Idempotent: an absent category is success.
pub async fn delete_photo_category(
    State(state): State<AppState>,
    Path((photo_id, category_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let deleted = PhotoEmbedding::delete_photo_category(&state.pool, category_id).await?;

    if deleted {
        tracing::info!(photo_id, category_id, "Photo category deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
