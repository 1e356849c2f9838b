//! Domain logic shared by the persistence and API layers.
//!
//! Contains the shared id/timestamp types, the domain error enum, and the
//! validation helpers for annotation inputs. This crate never touches the
//! database.

pub mod annotation;
pub mod error;
pub mod types;
