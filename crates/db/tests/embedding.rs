//! Integration tests for the embedding services.
//!
//! Exercises the cascade and idempotence behaviour against a real database:
//! - Region+coordinate creation is atomic (no partial region survives)
//! - Category batches are all-or-nothing
//! - Deletes are idempotent
//! - Edits reject cross-photo references
//! - Create-then-find round-trips all settable fields

use assert_matches::assert_matches;
use sqlx::PgPool;

use photomark_core::annotation::CategoryPair;
use photomark_db::embedding::{EmbedError, PhotoEmbedding, RegionEmbedding};
use photomark_db::models::category::{UpdatePhotoCategory, UpdateRegionCategory};
use photomark_db::models::photo::CreatePhoto;
use photomark_db::models::region::{CreatePhotoRegion, UpdateRegionCoordinate};
use photomark_db::repositories::{
    PhotoCategoryRepo, PhotoCommentRepo, PhotoRegionRepo, PhotoRepo, RegionCategoryRepo,
    RegionCommentRepo, RegionCoordinateRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_photo(user_id: i64) -> CreatePhoto {
    CreatePhoto {
        user_id,
        file_path: "/photos/test.jpg".to_string(),
        title: None,
        description: None,
    }
}

fn new_region(user_id: i64) -> CreatePhotoRegion {
    CreatePhotoRegion {
        user_id,
        shape_id: 1,
        region_name: None,
        region_x: 10,
        region_y: 20,
        height: 30,
        width: 40,
    }
}

fn pair(name: &str, value: &str) -> CategoryPair {
    CategoryPair {
        name: name.to_string(),
        value: value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Region + coordinate creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_photo_region_creates_region_and_coordinate(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();

    let created = RegionEmbedding::add_photo_region(&pool, photo.id, &new_region(2))
        .await
        .unwrap();

    assert_eq!(created.region.photo_id, photo.id);
    assert_eq!(created.region.user_id, 2);
    assert_eq!(created.region.shape_id, 1);
    assert_eq!(created.coordinate.region_id, created.region.id);
    assert_eq!(created.coordinate.region_x, 10);
    assert_eq!(created.coordinate.region_y, 20);
    assert_eq!(created.coordinate.height, 30);
    assert_eq!(created.coordinate.width, 40);

    // Round-trip: both rows are findable with the same field values.
    let region = PhotoRegionRepo::find_by_id(&pool, created.region.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(region.shape_id, 1);

    let coordinate = RegionCoordinateRepo::find_by_region(&pool, created.region.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(coordinate.id, created.coordinate.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_photo_region_rolls_back_when_coordinate_fails(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();

    // width = -1 violates the coordinate CHECK constraint, failing the
    // second insert of the transaction.
    let mut input = new_region(2);
    input.width = -1;

    let result = RegionEmbedding::add_photo_region(&pool, photo.id, &input).await;
    assert_matches!(result, Err(EmbedError::Database(_)));

    // No partial region survives.
    let regions = PhotoRegionRepo::list_by_photo(&pool, photo.id).await.unwrap();
    assert!(regions.is_empty());
    let coordinates = RegionCoordinateRepo::list_by_photo(&pool, photo.id)
        .await
        .unwrap();
    assert!(coordinates.is_empty());
}

// ---------------------------------------------------------------------------
// Idempotent deletes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_absent_region_is_success(pool: PgPool) {
    let deleted = RegionEmbedding::delete_photo_region(&pool, 999_999)
        .await
        .unwrap();
    assert!(!deleted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_region_removes_exactly_the_region(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let created = RegionEmbedding::add_photo_region(&pool, photo.id, &new_region(2))
        .await
        .unwrap();
    let comment = RegionEmbedding::add_region_comment(
        &pool,
        created.region.id,
        photo.id,
        2,
        "a note",
    )
    .await
    .unwrap();

    let deleted = RegionEmbedding::delete_photo_region(&pool, created.region.id)
        .await
        .unwrap();
    assert!(deleted);

    assert!(PhotoRegionRepo::find_by_id(&pool, created.region.id)
        .await
        .unwrap()
        .is_none());

    // Dependents survive the region delete and remain independently deletable.
    assert!(RegionCoordinateRepo::find_by_id(&pool, created.coordinate.id)
        .await
        .unwrap()
        .is_some());
    assert!(RegionEmbedding::delete_region_coordinate(&pool, created.coordinate.id)
        .await
        .unwrap());
    assert!(RegionEmbedding::delete_region_comment(&pool, comment.id)
        .await
        .unwrap());

    // Second delete of the same region is still success.
    let deleted_again = RegionEmbedding::delete_photo_region(&pool, created.region.id)
        .await
        .unwrap();
    assert!(!deleted_again);
}

// ---------------------------------------------------------------------------
// Region comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_region_comment_round_trip(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let created = RegionEmbedding::add_photo_region(&pool, photo.id, &new_region(2))
        .await
        .unwrap();

    let comment = RegionEmbedding::add_region_comment(
        &pool,
        created.region.id,
        photo.id,
        2,
        "left shoe",
    )
    .await
    .unwrap();

    let found = RegionCommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.region_id, created.region.id);
    assert_eq!(found.photo_id, photo.id);
    assert_eq!(found.user_id, 2);
    assert_eq!(found.comment_text, "left shoe");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_region_comment_rejects_wrong_photo(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let other = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let created = RegionEmbedding::add_photo_region(&pool, photo.id, &new_region(2))
        .await
        .unwrap();
    let comment =
        RegionEmbedding::add_region_comment(&pool, created.region.id, photo.id, 2, "original")
            .await
            .unwrap();

    let result =
        RegionEmbedding::edit_region_comment(&pool, comment.id, other.id, "tampered").await;
    assert_matches!(result, Err(EmbedError::InvalidReference { .. }));

    // The comment was not silently applied.
    let unchanged = RegionCommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.comment_text, "original");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_absent_region_comment_is_not_found(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();

    let result = RegionEmbedding::edit_region_comment(&pool, 999_999, photo.id, "text").await;
    assert_matches!(result, Err(EmbedError::NotFound { .. }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_region_comment_updates_text(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let created = RegionEmbedding::add_photo_region(&pool, photo.id, &new_region(2))
        .await
        .unwrap();
    let comment =
        RegionEmbedding::add_region_comment(&pool, created.region.id, photo.id, 2, "before")
            .await
            .unwrap();

    let updated = RegionEmbedding::edit_region_comment(&pool, comment.id, photo.id, "after")
        .await
        .unwrap();
    assert_eq!(updated.comment_text, "after");
}

// ---------------------------------------------------------------------------
// Region categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_region_category_persists_one_row_per_pair(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let created = RegionEmbedding::add_photo_region(&pool, photo.id, &new_region(2))
        .await
        .unwrap();

    let categories = RegionEmbedding::add_region_category(
        &pool,
        created.region.id,
        photo.id,
        2,
        &[pair("color", "red"), pair("season", "winter")],
    )
    .await
    .unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].category_name, "color");
    assert_eq!(categories[0].category_text, "red");
    assert_eq!(categories[0].region_id, created.region.id);
    assert_eq!(categories[1].category_name, "season");
    assert_eq!(categories[1].category_text, "winter");

    let listed = RegionCategoryRepo::list_by_region(&pool, created.region.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_region_category_batch_is_atomic(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let created = RegionEmbedding::add_photo_region(&pool, photo.id, &new_region(2))
        .await
        .unwrap();

    // The empty name violates the category_name CHECK constraint on the
    // second insert; the first pair must not survive.
    let result = RegionEmbedding::add_region_category(
        &pool,
        created.region.id,
        photo.id,
        2,
        &[pair("color", "red"), pair("", "broken")],
    )
    .await;
    assert_matches!(result, Err(EmbedError::Database(_)));

    let listed = RegionCategoryRepo::list_by_region(&pool, created.region.id)
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_region_category_rejects_wrong_photo(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let other = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let created = RegionEmbedding::add_photo_region(&pool, photo.id, &new_region(2))
        .await
        .unwrap();
    let categories = RegionEmbedding::add_region_category(
        &pool,
        created.region.id,
        photo.id,
        2,
        &[pair("color", "red")],
    )
    .await
    .unwrap();

    let result = RegionEmbedding::edit_region_category(
        &pool,
        categories[0].id,
        other.id,
        &UpdateRegionCategory {
            category_text: Some("blue".to_string()),
            ..Default::default()
        },
    )
    .await;
    assert_matches!(result, Err(EmbedError::InvalidReference { .. }));
}

// ---------------------------------------------------------------------------
// Region coordinates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_region_coordinate_updates_geometry(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let created = RegionEmbedding::add_photo_region(&pool, photo.id, &new_region(2))
        .await
        .unwrap();

    let updated = RegionEmbedding::edit_region_coordinate(
        &pool,
        created.coordinate.id,
        photo.id,
        &UpdateRegionCoordinate {
            region_x: Some(99),
            width: Some(77),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.region_x, 99);
    assert_eq!(updated.width, 77);
    // Untouched fields keep their values.
    assert_eq!(updated.region_y, 20);
    assert_eq!(updated.height, 30);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_region_coordinate_rejects_wrong_photo(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let other = PhotoRepo::create(&pool, &new_photo(2)).await.unwrap();
    let created = RegionEmbedding::add_photo_region(&pool, photo.id, &new_region(2))
        .await
        .unwrap();

    let result = RegionEmbedding::edit_region_coordinate(
        &pool,
        created.coordinate.id,
        other.id,
        &UpdateRegionCoordinate {
            region_x: Some(1),
            ..Default::default()
        },
    )
    .await;
    assert_matches!(result, Err(EmbedError::InvalidReference { .. }));
}

// ---------------------------------------------------------------------------
// Photo comments and categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_photo_comment_round_trip(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(3)).await.unwrap();

    let comment = PhotoEmbedding::add_photo_comment(&pool, photo.id, 3, "nice shot")
        .await
        .unwrap();

    let found = PhotoCommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.photo_id, photo.id);
    assert_eq!(found.user_id, 3);
    assert_eq!(found.comment_text, "nice shot");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_photo_comment_rejects_wrong_photo(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(3)).await.unwrap();
    let other = PhotoRepo::create(&pool, &new_photo(3)).await.unwrap();
    let comment = PhotoEmbedding::add_photo_comment(&pool, photo.id, 3, "original")
        .await
        .unwrap();

    let result = PhotoEmbedding::edit_photo_comment(&pool, comment.id, other.id, "tampered").await;
    assert_matches!(result, Err(EmbedError::InvalidReference { .. }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_photo_category_batch(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(3)).await.unwrap();

    let categories = PhotoEmbedding::add_photo_category(
        &pool,
        photo.id,
        3,
        &[pair("location", "oslo"), pair("event", "wedding")],
    )
    .await
    .unwrap();

    assert_eq!(categories.len(), 2);
    let listed = PhotoCategoryRepo::list_by_photo(&pool, photo.id).await.unwrap();
    assert_eq!(listed.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_photo_category_batch_is_atomic(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(3)).await.unwrap();

    let result = PhotoEmbedding::add_photo_category(
        &pool,
        photo.id,
        3,
        &[pair("location", "oslo"), pair("", "broken")],
    )
    .await;
    assert_matches!(result, Err(EmbedError::Database(_)));

    let listed = PhotoCategoryRepo::list_by_photo(&pool, photo.id).await.unwrap();
    assert!(listed.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_photo_category_updates_fields(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(3)).await.unwrap();
    let categories = PhotoEmbedding::add_photo_category(&pool, photo.id, 3, &[pair("a", "b")])
        .await
        .unwrap();

    let updated = PhotoEmbedding::edit_photo_category(
        &pool,
        categories[0].id,
        photo.id,
        &UpdatePhotoCategory {
            category_name: Some("mood".to_string()),
            category_text: Some("calm".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.category_name, "mood");
    assert_eq!(updated.category_text, "calm");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_photo_annotation_deletes_are_idempotent(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(3)).await.unwrap();
    let comment = PhotoEmbedding::add_photo_comment(&pool, photo.id, 3, "bye")
        .await
        .unwrap();

    assert!(PhotoEmbedding::delete_photo_comment(&pool, comment.id)
        .await
        .unwrap());
    assert!(!PhotoEmbedding::delete_photo_comment(&pool, comment.id)
        .await
        .unwrap());
    assert!(!PhotoEmbedding::delete_photo_category(&pool, 999_999)
        .await
        .unwrap());
}

// ---------------------------------------------------------------------------
// Photo hard delete cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hard_delete_photo_cascades_to_annotations(pool: PgPool) {
    let photo = PhotoRepo::create(&pool, &new_photo(4)).await.unwrap();
    let created = RegionEmbedding::add_photo_region(&pool, photo.id, &new_region(4))
        .await
        .unwrap();
    let comment = PhotoEmbedding::add_photo_comment(&pool, photo.id, 4, "gone soon")
        .await
        .unwrap();

    let deleted = PhotoRepo::hard_delete(&pool, photo.id).await.unwrap();
    assert!(deleted);

    assert!(PhotoRegionRepo::find_by_id(&pool, created.region.id)
        .await
        .unwrap()
        .is_none());
    assert!(RegionCoordinateRepo::find_by_id(&pool, created.coordinate.id)
        .await
        .unwrap()
        .is_none());
    assert!(PhotoCommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .is_none());
}
