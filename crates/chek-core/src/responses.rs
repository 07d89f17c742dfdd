//! CLI response types returned as JSON by `chek` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{GapEntry, RoadmapEntry};
use crate::enums::AdvisorKind;

/// Response from `chek benchmark evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BenchmarkResponse {
    pub project_id: String,
    pub entries: Vec<GapEntry>,
    pub message: String,
}

/// Response from `chek roadmap evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoadmapResponse {
    pub project_id: String,
    pub advisor: AdvisorKind,
    pub entries: Vec<RoadmapEntry>,
}
