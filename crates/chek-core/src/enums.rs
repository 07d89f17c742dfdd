//! Enums for CHEK.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// MaturityCategory
// ---------------------------------------------------------------------------

/// One of the four rubric categories a maturity score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MaturityCategory {
    Organisation,
    Technology,
    Information,
    Process,
}

impl MaturityCategory {
    /// All categories in evaluation order.
    pub const ALL: [Self; 4] = [
        Self::Organisation,
        Self::Technology,
        Self::Information,
        Self::Process,
    ];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organisation => "organisation",
            Self::Technology => "technology",
            Self::Information => "information",
            Self::Process => "process",
        }
    }

    /// Whether re-evaluating this category merges scores by label instead of
    /// replacing the whole category.
    #[must_use]
    pub const fn merges_by_label(self) -> bool {
        matches!(self, Self::Information)
    }
}

impl fmt::Display for MaturityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AdvisorKind
// ---------------------------------------------------------------------------

/// Which advisor produced a roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorKind {
    /// Deterministic dependency scheduler.
    Rule,
    /// Hosted chat model.
    Chat,
}

impl AdvisorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rule => "rule",
            Self::Chat => "chat",
        }
    }
}

impl fmt::Display for AdvisorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
