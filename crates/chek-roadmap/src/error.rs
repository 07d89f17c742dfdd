//! Roadmap error types.

use thiserror::Error;

/// Errors from gap calculation, scheduling, and roadmap validation.
#[derive(Debug, Error)]
pub enum RoadmapError {
    /// There are no maturity scores to benchmark yet.
    #[error("no maturity scores to benchmark")]
    NoData,

    /// The benchmark catalog could not be read.
    #[error("benchmark catalog unavailable at '{path}': {reason}")]
    CatalogUnavailable { path: String, reason: String },

    /// The benchmark catalog was read but is malformed.
    #[error("invalid benchmark catalog: {0}")]
    CatalogInvalid(String),

    /// A score level lies outside `-1..=5`.
    #[error("maturity level {level} for '{kma}' is outside -1..=5")]
    InvalidLevel { kma: String, level: i32 },

    /// KMA dependencies reference each other's actions in a loop.
    #[error("cyclic dependency between KMAs: {}", kmas.join(", "))]
    CyclicDependency { kmas: Vec<String> },

    /// A roadmap entry is malformed or breaks a scheduling invariant.
    #[error("roadmap entry '{kma}' failed validation: {}", errors.join("; "))]
    SchemaValidation { kma: String, errors: Vec<String> },

    /// Adding the remediation window overflowed the calendar.
    #[error("end date for '{kma}' is out of range")]
    DateOverflow { kma: String },
}

impl RoadmapError {
    /// Whether this error only means "nothing to compute yet".
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}
