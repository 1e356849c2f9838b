//! Route definitions for photos and their annotation sub-resources.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{photo, photo_annotation, region, region_annotation};
use crate::state::AppState;

/// Routes mounted at `/photos`.
///
/// ```text
/// POST   /                                          create photo
/// GET    /?user_id=                                 list photos
/// GET    /{id}                                      get photo
/// PUT    /{id}                                      update photo metadata
/// DELETE /{id}                                      delete photo (soft)
///
/// POST   /{photo_id}/regions                        create region + coordinate
/// GET    /{photo_id}/regions                        list regions
/// DELETE /{photo_id}/regions/{region_id}            delete region (idempotent)
/// POST   /{photo_id}/regions/{region_id}/comments   create region comment
/// GET    /{photo_id}/regions/{region_id}/comments   list region comments
/// POST   /{photo_id}/regions/{region_id}/categories create region category batch
/// GET    /{photo_id}/regions/{region_id}/categories list region categories
///
/// GET    /{photo_id}/coordinates                    list coordinates
/// PUT    /{photo_id}/coordinates/{id}               edit coordinate
/// DELETE /{photo_id}/coordinates/{id}               delete coordinate (idempotent)
/// PUT    /{photo_id}/region-comments/{id}           edit region comment
/// DELETE /{photo_id}/region-comments/{id}           delete region comment (idempotent)
/// PUT    /{photo_id}/region-categories/{id}         edit region category
/// DELETE /{photo_id}/region-categories/{id}         delete region category (idempotent)
///
/// POST   /{photo_id}/comments                       create photo comment
/// GET    /{photo_id}/comments                       list photo comments
/// PUT    /{photo_id}/comments/{id}                  edit photo comment
/// DELETE /{photo_id}/comments/{id}                  delete photo comment (idempotent)
/// POST   /{photo_id}/categories                     create photo category batch
/// GET    /{photo_id}/categories                     list photo categories
/// PUT    /{photo_id}/categories/{id}                edit photo category
/// DELETE /{photo_id}/categories/{id}                delete photo category (idempotent)
/// ```
pub fn router() -> Router<AppState> {
    let region_routes = Router::new()
        .route("/", get(region::list_regions).post(region::create_region))
        .route("/{region_id}", axum::routing::delete(region::delete_region))
        .route(
            "/{region_id}/comments",
            get(region_annotation::list_region_comments)
                .post(region_annotation::create_region_comment),
        )
        .route(
            "/{region_id}/categories",
            get(region_annotation::list_region_categories)
                .post(region_annotation::create_region_categories),
        );

    Router::new()
        .route("/", get(photo::list_photos).post(photo::create_photo))
        .route(
            "/{id}",
            get(photo::get_photo)
                .put(photo::update_photo)
                .delete(photo::delete_photo),
        )
        .nest("/{photo_id}/regions", region_routes)
        .route("/{photo_id}/coordinates", get(region::list_coordinates))
        .route(
            "/{photo_id}/coordinates/{id}",
            put(region::update_coordinate).delete(region::delete_coordinate),
        )
        .route(
            "/{photo_id}/region-comments/{id}",
            put(region_annotation::update_region_comment)
                .delete(region_annotation::delete_region_comment),
        )
        .route(
            "/{photo_id}/region-categories/{id}",
            put(region_annotation::update_region_category)
                .delete(region_annotation::delete_region_category),
        )
        .route(
            "/{photo_id}/comments",
            get(photo_annotation::list_photo_comments)
                .post(photo_annotation::create_photo_comment),
        )
        .route(
            "/{photo_id}/comments/{id}",
            put(photo_annotation::update_photo_comment)
                .delete(photo_annotation::delete_photo_comment),
        )
        .route(
            "/{photo_id}/categories",
            get(photo_annotation::list_photo_categories)
                .post(photo_annotation::create_photo_categories),
        )
        .route(
            "/{photo_id}/categories/{id}",
            put(photo_annotation::update_photo_category)
                .delete(photo_annotation::delete_photo_category),
        )
}
