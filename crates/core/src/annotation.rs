//! Annotation input constants and validation.
//!
//! Validation helpers for region geometry, comment text, and category
//! name/value pairs, shared by the API handlers and the embedding services.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum pixel extent for a region origin or dimension.
pub const MAX_REGION_EXTENT: i32 = 100_000;

/// Maximum length of a comment, in characters.
pub const MAX_COMMENT_LENGTH: usize = 2_000;

/// Maximum number of name/value pairs accepted per category batch.
pub const MAX_CATEGORY_PAIRS: usize = 20;

/// Maximum length of a category name, in characters.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// Maximum length of a category value, in characters.
pub const MAX_CATEGORY_TEXT_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Category pairs
// ---------------------------------------------------------------------------

/// A single category name/value pair, as submitted by clients.
///
/// Category batches persist one row per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPair {
    pub name: String,
    pub value: String,
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate the geometry of a rectangular region.
///
/// The origin must be non-negative, the dimensions strictly positive, and
/// everything bounded by [`MAX_REGION_EXTENT`].
pub fn validate_region_geometry(
    region_x: i32,
    region_y: i32,
    height: i32,
    width: i32,
) -> Result<(), CoreError> {
    if region_x < 0 || region_y < 0 {
        return Err(CoreError::Validation(format!(
            "region origin must be non-negative, got ({region_x}, {region_y})"
        )));
    }
    if height <= 0 || width <= 0 {
        return Err(CoreError::Validation(format!(
            "region dimensions must be positive, got {width}x{height}"
        )));
    }
    if region_x > MAX_REGION_EXTENT
        || region_y > MAX_REGION_EXTENT
        || height > MAX_REGION_EXTENT
        || width > MAX_REGION_EXTENT
    {
        return Err(CoreError::Validation(format!(
            "region exceeds maximum extent of {MAX_REGION_EXTENT}"
        )));
    }
    Ok(())
}

/// Validate comment text: non-blank and at most [`MAX_COMMENT_LENGTH`] characters.
pub fn validate_comment_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "comment text must not be blank".to_string(),
        ));
    }
    let len = text.chars().count();
    if len > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "comment text has {len} characters, maximum is {MAX_COMMENT_LENGTH}"
        )));
    }
    Ok(())
}

/// Validate a batch of category name/value pairs.
///
/// The batch must contain between 1 and [`MAX_CATEGORY_PAIRS`] entries, each
/// with a non-blank name within [`MAX_CATEGORY_NAME_LENGTH`] and a value
/// within [`MAX_CATEGORY_TEXT_LENGTH`].
pub fn validate_category_pairs(pairs: &[CategoryPair]) -> Result<(), CoreError> {
    if pairs.is_empty() {
        return Err(CoreError::Validation(
            "at least one category pair is required".to_string(),
        ));
    }
    if pairs.len() > MAX_CATEGORY_PAIRS {
        return Err(CoreError::Validation(format!(
            "category batch has {} pairs, maximum is {MAX_CATEGORY_PAIRS}",
            pairs.len()
        )));
    }
    for pair in pairs {
        validate_category_name(&pair.name)?;
        let value_len = pair.value.chars().count();
        if value_len > MAX_CATEGORY_TEXT_LENGTH {
            return Err(CoreError::Validation(format!(
                "category value for '{}' has {value_len} characters, maximum is {MAX_CATEGORY_TEXT_LENGTH}",
                pair.name
            )));
        }
    }
    Ok(())
}

/// Validate a single category name.
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "category name must not be blank".to_string(),
        ));
    }
    let len = name.chars().count();
    if len > MAX_CATEGORY_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "category name has {len} characters, maximum is {MAX_CATEGORY_NAME_LENGTH}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
