//! Handlers for the photos resource.
//!
//! Photos are created by the upload flow and act as the parent of all
//! annotations. Only metadata is managed here; image bytes live outside
//! this service.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;

use photomark_core::error::CoreError;
use photomark_core::types::DbId;
use photomark_db::models::photo::{CreatePhoto, UpdatePhoto};
use photomark_db::repositories::PhotoRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query filters for listing photos.
#[derive(Debug, Deserialize)]
pub struct PhotoListFilters {
    pub user_id: DbId,
}

/// Verify a photo exists, returning 404 otherwise.
///
/// Shared pre-check for every annotation operation scoped to a photo.
pub async fn ensure_photo_exists(pool: &PgPool, photo_id: DbId) -> AppResult<()> {
    PhotoRepo::find_by_id(pool, photo_id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id: photo_id,
        }))
}

/// POST /photos
///
/// Register a newly uploaded photo.
pub async fn create_photo(
    State(state): State<AppState>,
    Json(input): Json<CreatePhoto>,
) -> AppResult<impl IntoResponse> {
    if input.file_path.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "file_path must not be blank".to_string(),
        )));
    }

    let photo = PhotoRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = input.user_id, photo_id = photo.id, "Photo created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}

/// GET /photos?user_id=
///
/// List a user's photos.
pub async fn list_photos(
    State(state): State<AppState>,
    Query(filters): Query<PhotoListFilters>,
) -> AppResult<impl IntoResponse> {
    let photos = PhotoRepo::list_by_user(&state.pool, filters.user_id).await?;
    Ok(Json(DataResponse { data: photos }))
}

/// GET /photos/{id}
///
/// Get a single photo by ID.
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let photo = PhotoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id,
        }))?;
    Ok(Json(DataResponse { data: photo }))
}

/// PUT /photos/{id}
///
/// Update photo metadata.
pub async fn update_photo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePhoto>,
) -> AppResult<impl IntoResponse> {
    let photo = PhotoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id,
        }))?;

    tracing::info!(photo_id = id, "Photo updated");

    Ok(Json(DataResponse { data: photo }))
}

/// DELETE /photos/{id}
///
/// Soft-delete a photo. Annotations stay in place for a possible restore.
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PhotoRepo::soft_delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id,
        }));
    }

    tracing::info!(photo_id = id, "Photo deleted");

    Ok(StatusCode::NO_CONTENT)
}
