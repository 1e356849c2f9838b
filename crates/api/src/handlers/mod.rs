//! Request handlers.
//!
//! Each handler validates its inputs, performs the photo/region reference
//! pre-checks, invokes exactly one embedding-service or repository
//! operation, and wraps the result in the `{ "data": ... }` envelope.

pub mod photo;
pub mod photo_annotation;
pub mod region;
pub mod region_annotation;
