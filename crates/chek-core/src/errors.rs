//! Cross-cutting error types for CHEK.
//!
//! This module defines errors that can originate from any crate in the system.
//! Domain-specific errors (e.g., `DatabaseError`, `RoadmapError`) are defined in
//! their respective crates and converge in `chek-cli` through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any CHEK crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A maturity level lies outside the rubric.
    #[error("Level {level} for '{label}' is outside [{min}, {max}]")]
    LevelOutOfRange {
        label: String,
        level: i32,
        min: i32,
        max: i32,
    },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
