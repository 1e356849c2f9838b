//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-step writes that must
//! be atomic live in the embedding services instead.

pub mod photo_category_repo;
pub mod photo_comment_repo;
pub mod photo_region_repo;
pub mod photo_repo;
pub mod region_category_repo;
pub mod region_comment_repo;
pub mod region_coordinate_repo;

pub use photo_category_repo::PhotoCategoryRepo;
pub use photo_comment_repo::PhotoCommentRepo;
pub use photo_region_repo::PhotoRegionRepo;
pub use photo_repo::PhotoRepo;
pub use region_category_repo::RegionCategoryRepo;
pub use region_comment_repo::RegionCommentRepo;
pub use region_coordinate_repo::RegionCoordinateRepo;
