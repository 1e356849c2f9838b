//! Embedding services.
//!
//! "Embedding" is the act of attaching annotation data (regions, comments,
//! categories) onto a photo or region. Two cooperating services orchestrate
//! the multi-step writes:
//!
//! - [`RegionEmbedding`] -- region-scoped annotations (regions with their
//!   coordinates, region comments, region categories)
//! - [`PhotoEmbedding`] -- whole-photo comments and categories
//!
//! Every multi-row write runs inside one transaction, so a failure midway
//! leaves no partial state. Deletes are idempotent: an absent id is treated
//! as already deleted. Edits verify that the target row belongs to the photo
//! the caller claims before any mutation is attempted.

use photomark_core::types::DbId;

pub mod photo;
pub mod region;

pub use photo::PhotoEmbedding;
pub use region::RegionEmbedding;

/// Error type for embedding-service operations.
///
/// Distinguishes "not found" and "wrong photo" from persistence failures so
/// the API layer can map each to a distinct response instead of a uniform
/// success outcome.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// The underlying persistence call failed; the enclosing transaction
    /// has been rolled back.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The edit target does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The edit target exists but belongs to a different photo than the
    /// caller claimed.
    #[error("{entity} with id {id} does not belong to photo {photo_id}")]
    InvalidReference {
        entity: &'static str,
        id: DbId,
        photo_id: DbId,
    },
}
